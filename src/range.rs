// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranges with independently inclusive or exclusive bounds.
//!
//! ```
//! use guardclause::Range;
//!
//! let percent = Range::from_inclusive(0).to_inclusive(100)?;
//! assert!(percent.contains(&100));
//!
//! let index = Range::from_inclusive(0).to_exclusive(10)?;
//! assert!(!index.contains(&10));
//! assert_eq!(index.to_string(), "0 (inclusive) and 10 (exclusive)");
//! # Ok::<(), guardclause::GuardError>(())
//! ```
//!
//! A range is validated when it is built: `to` must not be less than `from`,
//! otherwise construction fails with an `OutOfRange` error for `to`.
//! Containment uses `PartialOrd`, so a value that does not compare with a
//! bound (NaN, for instance) is never inside.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::GuardError;
use crate::strategy::Param;
use crate::throw;

/// A range between `from` and `to`, each bound inclusive or exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range<T> {
    from: T,
    to: T,
    from_inclusive: bool,
    to_inclusive: bool,
}

impl<T: PartialOrd + fmt::Debug> Range<T> {
    /// Fails with `OutOfRange` (parameter `to`) when `to < from`, or when the
    /// bounds do not compare.
    pub fn new(from: T, from_inclusive: bool, to: T, to_inclusive: bool) -> Result<Self, GuardError> {
        match to.partial_cmp(&from) {
            Some(Ordering::Less) | None => {
                Err(throw::must_not_be_less_than(&to, &from, Param::named("to")))
            }
            Some(_) => Ok(Self {
                from,
                to,
                from_inclusive,
                to_inclusive,
            }),
        }
    }

    pub fn from_inclusive(from: T) -> RangeFromInfo<T> {
        RangeFromInfo {
            from,
            inclusive: true,
        }
    }

    pub fn from_exclusive(from: T) -> RangeFromInfo<T> {
        RangeFromInfo {
            from,
            inclusive: false,
        }
    }

    /// Whether `value` lies inside the range, respecting bound inclusivity.
    pub fn contains(&self, value: &T) -> bool {
        let above_lower = match value.partial_cmp(&self.from) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.from_inclusive,
            Some(Ordering::Less) | None => false,
        };
        if !above_lower {
            return false;
        }
        match value.partial_cmp(&self.to) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => self.to_inclusive,
            Some(Ordering::Greater) | None => false,
        }
    }
}

impl<T> Range<T> {
    pub fn from(&self) -> &T {
        &self.from
    }

    pub fn to(&self) -> &T {
        &self.to
    }

    pub fn is_from_inclusive(&self) -> bool {
        self.from_inclusive
    }

    pub fn is_to_inclusive(&self) -> bool {
        self.to_inclusive
    }
}

/// `1 (inclusive) and 10 (exclusive)`, as in the default range messages.
impl<T: fmt::Debug> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} ({}) and {:?} ({})",
            self.from,
            inclusivity(self.from_inclusive),
            self.to,
            inclusivity(self.to_inclusive)
        )
    }
}

fn inclusivity(inclusive: bool) -> &'static str {
    if inclusive {
        "inclusive"
    } else {
        "exclusive"
    }
}

/// Lower bound of a range under construction.
#[derive(Debug, Clone, Copy)]
#[must_use = "a range needs an upper bound"]
pub struct RangeFromInfo<T> {
    from: T,
    inclusive: bool,
}

impl<T: PartialOrd + fmt::Debug> RangeFromInfo<T> {
    pub fn to_inclusive(self, to: T) -> Result<Range<T>, GuardError> {
        Range::new(self.from, self.inclusive, to, true)
    }

    pub fn to_exclusive(self, to: T) -> Result<Range<T>, GuardError> {
        Range::new(self.from, self.inclusive, to, false)
    }
}
