// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String checks.
//!
//! Every check accepts any [`MaybeStr`]: `&str`, `String`, `Cow<str>`,
//! `Box<str>` and `Option`s of those. An absent string never satisfies a
//! string check; with the default strategy it reports `Null`, a custom
//! callback receives the absent value like any other.
//!
//! Checks without a comparison mode compare ordinally; the `_by` variants take
//! a [`StringComparison`] and pass it on to the callback as the last argument.

use regex::Regex;

use crate::error::GuardError;
use crate::strategy::{Param, Strategy};
use crate::text::{MaybeStr, StringComparison};
use crate::throw;

/// Null first, then the check-specific producer.
#[inline]
fn present_or_null<V: MaybeStr>(
    value: &V,
    param: Param<'_>,
    produce: impl FnOnce(&str, Param<'_>) -> GuardError,
) -> GuardError {
    match value.as_opt_str() {
        Some(text) => produce(text, param),
        None => throw::argument_null(param),
    }
}

pub trait StrGuards: MaybeStr + Sized {
    /// `true` for an absent or empty string.
    fn is_null_or_empty(&self) -> bool {
        self.as_opt_str().map_or(true, str::is_empty)
    }

    /// `true` for an absent string or one made of white space only.
    fn is_null_or_white_space(&self) -> bool {
        self.as_opt_str()
            .map_or(true, |text| text.chars().all(char::is_whitespace))
    }

    /// `true` when the string is present and occurs in `other`.
    fn is_substring_of(&self, other: &str, comparison: StringComparison) -> bool {
        self.as_opt_str()
            .is_some_and(|text| comparison.contains(other, text))
    }

    /// Fails with `Null` or `EmptyString`.
    fn must_not_be_null_or_empty<S>(self, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(Self,)>,
    {
        if !self.is_null_or_empty() {
            return Ok(self);
        }
        Err(strategy.fail((self,), |(value,), param| {
            present_or_null(&value, param, |_, param| throw::empty_string(param))
        }))
    }

    /// Fails with `Null`, `EmptyString` or `WhiteSpaceString`.
    fn must_not_be_null_or_white_space<S>(self, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(Self,)>,
    {
        if !self.is_null_or_white_space() {
            return Ok(self);
        }
        Err(strategy.fail((self,), |(value,), param| {
            present_or_null(&value, param, |text, param| {
                if text.is_empty() {
                    throw::empty_string(param)
                } else {
                    throw::white_space_string(text, param)
                }
            })
        }))
    }

    /// Fails with `ValuesNotEqual` unless equal to `other` under `comparison`.
    fn must_be<'o, S>(
        self,
        other: &'o str,
        comparison: StringComparison,
        strategy: S,
    ) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, &'o str, StringComparison)>,
    {
        if self
            .as_opt_str()
            .is_some_and(|text| comparison.equals(text, other))
        {
            return Ok(self);
        }
        Err(strategy.fail(
            (self, other, comparison),
            |(value, other, comparison), param| {
                present_or_null(&value, param, |text, param| {
                    throw::strings_not_equal(text, other, comparison, param)
                })
            },
        ))
    }

    /// Fails with `ValuesEqual` when equal to `other` under `comparison`.
    fn must_not_be<'o, S>(
        self,
        other: &'o str,
        comparison: StringComparison,
        strategy: S,
    ) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, &'o str, StringComparison)>,
    {
        if self
            .as_opt_str()
            .is_some_and(|text| !comparison.equals(text, other))
        {
            return Ok(self);
        }
        Err(strategy.fail(
            (self, other, comparison),
            |(value, other, comparison), param| {
                present_or_null(&value, param, |text, param| {
                    throw::strings_equal(text, other, comparison, param)
                })
            },
        ))
    }

    /// Fails with `StringMismatch` unless `regex` finds a match.
    fn must_match<'r, S>(self, regex: &'r Regex, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, &'r Regex)>,
    {
        if self.as_opt_str().is_some_and(|text| regex.is_match(text)) {
            return Ok(self);
        }
        Err(strategy.fail((self, regex), |(value, regex), param| {
            present_or_null(&value, param, |text, param| {
                throw::string_does_not_match(text, regex, param)
            })
        }))
    }

    /// Fails with `SubstringMissing` unless `needle` occurs in the string.
    fn must_contain<'n, S>(self, needle: &'n str, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, &'n str)>,
    {
        if self.as_opt_str().is_some_and(|text| text.contains(needle)) {
            return Ok(self);
        }
        Err(strategy.fail((self, needle), |(value, needle), param| {
            present_or_null(&value, param, |text, param| {
                throw::string_does_not_contain(text, needle, None, param)
            })
        }))
    }

    fn must_contain_by<'n, S>(
        self,
        needle: &'n str,
        comparison: StringComparison,
        strategy: S,
    ) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, &'n str, StringComparison)>,
    {
        if self
            .as_opt_str()
            .is_some_and(|text| comparison.contains(text, needle))
        {
            return Ok(self);
        }
        Err(strategy.fail(
            (self, needle, comparison),
            |(value, needle, comparison), param| {
                present_or_null(&value, param, |text, param| {
                    throw::string_does_not_contain(text, needle, Some(comparison), param)
                })
            },
        ))
    }

    /// Fails with `SubstringPresent` when `needle` occurs in the string.
    fn must_not_contain<'n, S>(self, needle: &'n str, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, &'n str)>,
    {
        if self.as_opt_str().is_some_and(|text| !text.contains(needle)) {
            return Ok(self);
        }
        Err(strategy.fail((self, needle), |(value, needle), param| {
            present_or_null(&value, param, |text, param| {
                throw::string_contains(text, needle, None, param)
            })
        }))
    }

    fn must_not_contain_by<'n, S>(
        self,
        needle: &'n str,
        comparison: StringComparison,
        strategy: S,
    ) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, &'n str, StringComparison)>,
    {
        if self
            .as_opt_str()
            .is_some_and(|text| !comparison.contains(text, needle))
        {
            return Ok(self);
        }
        Err(strategy.fail(
            (self, needle, comparison),
            |(value, needle, comparison), param| {
                present_or_null(&value, param, |text, param| {
                    throw::string_contains(text, needle, Some(comparison), param)
                })
            },
        ))
    }

    /// Fails with `NotASubstring` unless the string occurs in `other`.
    fn must_be_substring_of<'o, S>(self, other: &'o str, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, &'o str)>,
    {
        if self.as_opt_str().is_some_and(|text| other.contains(text)) {
            return Ok(self);
        }
        Err(strategy.fail((self, other), |(value, other), param| {
            present_or_null(&value, param, |text, param| {
                throw::not_substring(text, other, None, param)
            })
        }))
    }

    fn must_be_substring_of_by<'o, S>(
        self,
        other: &'o str,
        comparison: StringComparison,
        strategy: S,
    ) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, &'o str, StringComparison)>,
    {
        if self.is_substring_of(other, comparison) {
            return Ok(self);
        }
        Err(strategy.fail(
            (self, other, comparison),
            |(value, other, comparison), param| {
                present_or_null(&value, param, |text, param| {
                    throw::not_substring(text, other, Some(comparison), param)
                })
            },
        ))
    }

    /// Fails with `IsASubstring` when the string occurs in `other`.
    fn must_not_be_substring_of<'o, S>(self, other: &'o str, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, &'o str)>,
    {
        if self.as_opt_str().is_some_and(|text| !other.contains(text)) {
            return Ok(self);
        }
        Err(strategy.fail((self, other), |(value, other), param| {
            present_or_null(&value, param, |text, param| {
                throw::substring(text, other, None, param)
            })
        }))
    }

    fn must_not_be_substring_of_by<'o, S>(
        self,
        other: &'o str,
        comparison: StringComparison,
        strategy: S,
    ) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, &'o str, StringComparison)>,
    {
        if self
            .as_opt_str()
            .is_some_and(|text| !comparison.contains(other, text))
        {
            return Ok(self);
        }
        Err(strategy.fail(
            (self, other, comparison),
            |(value, other, comparison), param| {
                present_or_null(&value, param, |text, param| {
                    throw::substring(text, other, Some(comparison), param)
                })
            },
        ))
    }
}

impl<T: MaybeStr> StrGuards for T {}
