// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String inputs and comparison modes.
//!
//! [`MaybeStr`] lets the string checks accept borrowed and owned strings as
//! well as their `Option` forms; `None` is the null string.
//!
//! [`StringComparison`] selects how two strings are compared. Modes are
//! ordinal (char by char, no culture rules). Ignoring case lowercases both
//! sides with Unicode case mapping; ignoring white space drops every
//! `char::is_whitespace` character before comparing.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enums::EnumType;
use crate::error::GuardError;
use crate::strategy::Param;
use crate::throw;

/// A value that may hold a string.
pub trait MaybeStr {
    fn as_opt_str(&self) -> Option<&str>;
}

impl MaybeStr for str {
    #[inline]
    fn as_opt_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl MaybeStr for String {
    #[inline]
    fn as_opt_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl MaybeStr for Box<str> {
    #[inline]
    fn as_opt_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl MaybeStr for Cow<'_, str> {
    #[inline]
    fn as_opt_str(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: MaybeStr> MaybeStr for Option<T> {
    #[inline]
    fn as_opt_str(&self) -> Option<&str> {
        self.as_ref().and_then(MaybeStr::as_opt_str)
    }
}

impl<T: MaybeStr + ?Sized> MaybeStr for &T {
    #[inline]
    fn as_opt_str(&self) -> Option<&str> {
        (**self).as_opt_str()
    }
}

/// How two strings are compared.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    guardclause_macros::EnumType,
)]
#[serde(rename_all = "snake_case")]
pub enum StringComparison {
    #[default]
    Ordinal = 0,
    OrdinalIgnoreCase = 1,
    OrdinalIgnoreWhiteSpace = 2,
    OrdinalIgnoreCaseIgnoreWhiteSpace = 3,
}

impl StringComparison {
    pub const fn ignores_case(self) -> bool {
        matches!(
            self,
            StringComparison::OrdinalIgnoreCase | StringComparison::OrdinalIgnoreCaseIgnoreWhiteSpace
        )
    }

    pub const fn ignores_white_space(self) -> bool {
        matches!(
            self,
            StringComparison::OrdinalIgnoreWhiteSpace
                | StringComparison::OrdinalIgnoreCaseIgnoreWhiteSpace
        )
    }

    /// The form both sides are reduced to before comparing.
    fn normalize<'s>(self, value: &'s str) -> Cow<'s, str> {
        let mut value = Cow::Borrowed(value);
        if self.ignores_white_space() && value.chars().any(char::is_whitespace) {
            value = Cow::Owned(value.chars().filter(|c| !c.is_whitespace()).collect());
        }
        if self.ignores_case() {
            value = Cow::Owned(value.to_lowercase());
        }
        value
    }

    pub fn equals(self, left: &str, right: &str) -> bool {
        match self {
            StringComparison::Ordinal => left == right,
            _ => self.normalize(left) == self.normalize(right),
        }
    }

    /// Whether `needle` occurs in `haystack`. The empty needle always occurs.
    pub fn contains(self, haystack: &str, needle: &str) -> bool {
        match self {
            StringComparison::Ordinal => haystack.contains(needle),
            _ => self
                .normalize(haystack)
                .contains(self.normalize(needle).as_ref()),
        }
    }
}

impl fmt::Display for StringComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant_name())
    }
}

/// Accepts the variant name (`OrdinalIgnoreCase`) or its serde form
/// (`ordinal_ignore_case`). Anything else is `EnumValueUndefined`.
impl FromStr for StringComparison {
    type Err = GuardError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let position = Self::VARIANT_NAMES.iter().position(|name| {
            *name == text || snake_case(name) == text
        });
        match position {
            Some(index) => Ok(Self::VARIANTS[index]),
            None => Err(throw::enum_value_not_defined(
                text,
                Self::NAME,
                Param::named("comparison"),
            )),
        }
    }
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (index, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if index > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
