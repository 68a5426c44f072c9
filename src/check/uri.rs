// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! URI checks.
//!
//! Strings are classified with [`url::Url::parse`]: a string that parses is
//! absolute, a string rejected only for lacking a base is relative. Anything
//! else (an invalid port, a malformed host) is neither.

use url::{ParseError, Url};

use crate::strategy::Strategy;
use crate::throw;

fn is_relative(value: &str) -> bool {
    matches!(Url::parse(value), Err(ParseError::RelativeUrlWithoutBase))
}

pub trait UriStrGuards<'a> {
    /// Fails with `AbsoluteUriExpected` unless the string is an absolute URI.
    fn must_be_absolute_uri<S>(self, strategy: S) -> Result<&'a str, S::Error>
    where
        S: Strategy<(&'a str,)>;

    /// Fails with `RelativeUriExpected` unless the string is a relative reference.
    fn must_be_relative_uri<S>(self, strategy: S) -> Result<&'a str, S::Error>
    where
        S: Strategy<(&'a str,)>;
}

impl<'a> UriStrGuards<'a> for &'a str {
    fn must_be_absolute_uri<S>(self, strategy: S) -> Result<&'a str, S::Error>
    where
        S: Strategy<(&'a str,)>,
    {
        if Url::parse(self).is_ok() {
            Ok(self)
        } else {
            Err(strategy.fail((self,), |(value,), param| {
                throw::must_be_absolute_uri(value, param)
            }))
        }
    }

    fn must_be_relative_uri<S>(self, strategy: S) -> Result<&'a str, S::Error>
    where
        S: Strategy<(&'a str,)>,
    {
        if is_relative(self) {
            Ok(self)
        } else {
            Err(strategy.fail((self,), |(value,), param| {
                throw::must_be_relative_uri(value, param)
            }))
        }
    }
}

/// Scheme checks on a parsed [`Url`]. Schemes compare case-insensitively.
pub trait UrlGuards<'a> {
    fn must_have_scheme<'s, S>(self, scheme: &'s str, strategy: S) -> Result<&'a Url, S::Error>
    where
        S: Strategy<(&'a Url, &'s str)>;

    fn must_have_one_scheme_of<'s, S>(
        self,
        schemes: &'s [&'s str],
        strategy: S,
    ) -> Result<&'a Url, S::Error>
    where
        S: Strategy<(&'a Url, &'s [&'s str])>;

    /// `must_have_one_scheme_of(&["http", "https"], ..)`.
    fn must_be_http_or_https<S>(self, strategy: S) -> Result<&'a Url, S::Error>
    where
        S: Strategy<(&'a Url, &'static [&'static str])>;
}

const HTTP_OR_HTTPS: &[&str] = &["http", "https"];

impl<'a> UrlGuards<'a> for &'a Url {
    fn must_have_scheme<'s, S>(self, scheme: &'s str, strategy: S) -> Result<&'a Url, S::Error>
    where
        S: Strategy<(&'a Url, &'s str)>,
    {
        if self.scheme().eq_ignore_ascii_case(scheme) {
            Ok(self)
        } else {
            Err(strategy.fail((self, scheme), |(url, scheme), param| {
                throw::uri_must_have_scheme(url, scheme, param)
            }))
        }
    }

    fn must_have_one_scheme_of<'s, S>(
        self,
        schemes: &'s [&'s str],
        strategy: S,
    ) -> Result<&'a Url, S::Error>
    where
        S: Strategy<(&'a Url, &'s [&'s str])>,
    {
        let scheme = self.scheme();
        if schemes
            .iter()
            .any(|candidate| scheme.eq_ignore_ascii_case(candidate))
        {
            Ok(self)
        } else {
            Err(strategy.fail((self, schemes), |(url, schemes), param| {
                throw::uri_must_have_one_scheme_of(url, schemes, param)
            }))
        }
    }

    fn must_be_http_or_https<S>(self, strategy: S) -> Result<&'a Url, S::Error>
    where
        S: Strategy<(&'a Url, &'static [&'static str])>,
    {
        self.must_have_one_scheme_of(HTTP_OR_HTTPS, strategy)
    }
}
