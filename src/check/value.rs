// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checks that apply to any value: default, equality, ordering, ranges and
//! membership in a fixed set.
//!
//! A custom callback receives the value and whatever the value was checked
//! against, by value: `(value, boundary)`, `(value, range)`,
//! `(value, items)`.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::range::Range;
use crate::strategy::Strategy;
use crate::throw;

#[inline]
fn holds<T: PartialOrd>(value: &T, boundary: &T, accept: fn(Ordering) -> bool) -> bool {
    value.partial_cmp(boundary).is_some_and(accept)
}

/// Implemented for every sized type; each method adds the bounds it needs.
pub trait ValueGuards: Sized {
    /// Fails with `DefaultValue` when the value equals `Self::default()`.
    fn must_not_be_default<S>(self, strategy: S) -> Result<Self, S::Error>
    where
        Self: Default + PartialEq,
        S: Strategy<(Self,)>,
    {
        if self == Self::default() {
            Err(strategy.fail((self,), |_, param| throw::argument_default(param)))
        } else {
            Ok(self)
        }
    }

    fn must_be_equal_to<S>(self, other: Self, strategy: S) -> Result<Self, S::Error>
    where
        Self: PartialEq + Debug,
        S: Strategy<(Self, Self)>,
    {
        if self == other {
            Ok(self)
        } else {
            Err(strategy.fail((self, other), |(value, other), param| {
                throw::values_not_equal(&value, &other, param)
            }))
        }
    }

    fn must_not_be_equal_to<S>(self, other: Self, strategy: S) -> Result<Self, S::Error>
    where
        Self: PartialEq + Debug,
        S: Strategy<(Self, Self)>,
    {
        if self != other {
            Ok(self)
        } else {
            Err(strategy.fail((self, other), |(value, other), param| {
                throw::values_equal(&value, &other, param)
            }))
        }
    }

    /// `value < boundary`.
    fn must_be_less_than<S>(self, boundary: Self, strategy: S) -> Result<Self, S::Error>
    where
        Self: PartialOrd + Debug,
        S: Strategy<(Self, Self)>,
    {
        if holds(&self, &boundary, Ordering::is_lt) {
            Ok(self)
        } else {
            Err(strategy.fail((self, boundary), |(value, boundary), param| {
                throw::must_be_less_than(&value, &boundary, param)
            }))
        }
    }

    /// `value <= boundary`.
    fn must_be_less_than_or_equal_to<S>(self, boundary: Self, strategy: S) -> Result<Self, S::Error>
    where
        Self: PartialOrd + Debug,
        S: Strategy<(Self, Self)>,
    {
        if holds(&self, &boundary, Ordering::is_le) {
            Ok(self)
        } else {
            Err(strategy.fail((self, boundary), |(value, boundary), param| {
                throw::must_be_less_than_or_equal_to(&value, &boundary, param)
            }))
        }
    }

    /// `value > boundary`.
    fn must_be_greater_than<S>(self, boundary: Self, strategy: S) -> Result<Self, S::Error>
    where
        Self: PartialOrd + Debug,
        S: Strategy<(Self, Self)>,
    {
        if holds(&self, &boundary, Ordering::is_gt) {
            Ok(self)
        } else {
            Err(strategy.fail((self, boundary), |(value, boundary), param| {
                throw::must_be_greater_than(&value, &boundary, param)
            }))
        }
    }

    /// `value >= boundary`.
    fn must_be_greater_than_or_equal_to<S>(
        self,
        boundary: Self,
        strategy: S,
    ) -> Result<Self, S::Error>
    where
        Self: PartialOrd + Debug,
        S: Strategy<(Self, Self)>,
    {
        if holds(&self, &boundary, Ordering::is_ge) {
            Ok(self)
        } else {
            Err(strategy.fail((self, boundary), |(value, boundary), param| {
                throw::must_be_greater_than_or_equal_to(&value, &boundary, param)
            }))
        }
    }

    /// `value >= boundary`, reported as "must not be less than".
    fn must_not_be_less_than<S>(self, boundary: Self, strategy: S) -> Result<Self, S::Error>
    where
        Self: PartialOrd + Debug,
        S: Strategy<(Self, Self)>,
    {
        if holds(&self, &boundary, Ordering::is_ge) {
            Ok(self)
        } else {
            Err(strategy.fail((self, boundary), |(value, boundary), param| {
                throw::must_not_be_less_than(&value, &boundary, param)
            }))
        }
    }

    /// `value > boundary`, reported as "must not be less than or equal to".
    fn must_not_be_less_than_or_equal_to<S>(
        self,
        boundary: Self,
        strategy: S,
    ) -> Result<Self, S::Error>
    where
        Self: PartialOrd + Debug,
        S: Strategy<(Self, Self)>,
    {
        if holds(&self, &boundary, Ordering::is_gt) {
            Ok(self)
        } else {
            Err(strategy.fail((self, boundary), |(value, boundary), param| {
                throw::must_not_be_less_than_or_equal_to(&value, &boundary, param)
            }))
        }
    }

    /// `value <= boundary`, reported as "must not be greater than".
    fn must_not_be_greater_than<S>(self, boundary: Self, strategy: S) -> Result<Self, S::Error>
    where
        Self: PartialOrd + Debug,
        S: Strategy<(Self, Self)>,
    {
        if holds(&self, &boundary, Ordering::is_le) {
            Ok(self)
        } else {
            Err(strategy.fail((self, boundary), |(value, boundary), param| {
                throw::must_not_be_greater_than(&value, &boundary, param)
            }))
        }
    }

    /// `value < boundary`, reported as "must not be greater than or equal to".
    fn must_not_be_greater_than_or_equal_to<S>(
        self,
        boundary: Self,
        strategy: S,
    ) -> Result<Self, S::Error>
    where
        Self: PartialOrd + Debug,
        S: Strategy<(Self, Self)>,
    {
        if holds(&self, &boundary, Ordering::is_lt) {
            Ok(self)
        } else {
            Err(strategy.fail((self, boundary), |(value, boundary), param| {
                throw::must_not_be_greater_than_or_equal_to(&value, &boundary, param)
            }))
        }
    }

    fn is_in(&self, range: &Range<Self>) -> bool
    where
        Self: PartialOrd + Debug,
    {
        range.contains(self)
    }

    fn must_be_in<S>(self, range: Range<Self>, strategy: S) -> Result<Self, S::Error>
    where
        Self: PartialOrd + Debug,
        S: Strategy<(Self, Range<Self>)>,
    {
        if range.contains(&self) {
            Ok(self)
        } else {
            Err(strategy.fail((self, range), |(value, range), param| {
                throw::must_be_in_range(&value, &range, param)
            }))
        }
    }

    fn must_not_be_in<S>(self, range: Range<Self>, strategy: S) -> Result<Self, S::Error>
    where
        Self: PartialOrd + Debug,
        S: Strategy<(Self, Range<Self>)>,
    {
        if range.contains(&self) {
            Err(strategy.fail((self, range), |(value, range), param| {
                throw::must_not_be_in_range(&value, &range, param)
            }))
        } else {
            Ok(self)
        }
    }

    /// Fails with `ValueNotOneOf` unless an item equals the value.
    ///
    /// Evaluated unconditionally; [`must_be_one_of!`](crate::must_be_one_of)
    /// is the variant that compiles away without `compile-assertions`.
    fn must_be_one_of<'i, S>(self, items: &'i [Self], strategy: S) -> Result<Self, S::Error>
    where
        Self: PartialEq + Debug,
        S: Strategy<(Self, &'i [Self])>,
    {
        if items.contains(&self) {
            Ok(self)
        } else {
            Err(strategy.fail((self, items), |(value, items), param| {
                throw::value_not_one_of(&value, items, param)
            }))
        }
    }

    /// Fails with `ValueIsOneOf` when an item equals the value.
    fn must_not_be_one_of<'i, S>(self, items: &'i [Self], strategy: S) -> Result<Self, S::Error>
    where
        Self: PartialEq + Debug,
        S: Strategy<(Self, &'i [Self])>,
    {
        if items.contains(&self) {
            Err(strategy.fail((self, items), |(value, items), param| {
                throw::value_is_one_of(&value, items, param)
            }))
        } else {
            Ok(self)
        }
    }
}

impl<T> ValueGuards for T {}
