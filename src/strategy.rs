// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! How a failed check turns into an error.
//!
//! Every check takes a strategy as its last argument. Either you hand it the
//! parameter name (optionally with a message) and get the default
//! [`GuardError`], or you hand it a closure and get whatever the closure
//! returns. There is no third option, and no way to pass both.
//!
//! ```ignore
//! let port = port.must_be_greater_than(0_u16, "port")?;
//! let port = port.must_be_greater_than(0_u16, Param::named("port").with_message("port is unset"))?;
//! let port = port.must_be_greater_than(0_u16, |value: u16, floor: u16| ConfigError::Port(value, floor))?;
//! ```
//!
//! The closure's arity follows the check's context: a range check hands the
//! closure `(value, range)`, a comparison-mode string check hands it
//! `(value, other, comparison)`, a presence check on `Option` hands it nothing.

use crate::error::GuardError;
use crate::throw;

/// Parameter name and optional custom message for the default failure.
///
/// Without a name the message falls back to a generic noun ("The value",
/// "The string", ...). A custom message replaces the template entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Param<'a> {
    name: Option<&'a str>,
    message: Option<&'a str>,
}

impl<'a> Param<'a> {
    pub const fn unnamed() -> Self {
        Self {
            name: None,
            message: None,
        }
    }

    pub const fn named(name: &'a str) -> Self {
        Self {
            name: Some(name),
            message: None,
        }
    }

    /// No parameter name, only a message. Mostly useful for state checks.
    pub const fn message(message: &'a str) -> Self {
        Self {
            name: None,
            message: Some(message),
        }
    }

    pub const fn with_message(self, message: &'a str) -> Self {
        Self {
            name: self.name,
            message: Some(message),
        }
    }

    pub const fn name(&self) -> Option<&'a str> {
        self.name
    }

    pub const fn custom_message(&self) -> Option<&'a str> {
        self.message
    }
}

/// Decides which error a failed check returns.
///
/// `C` is the check's context, always a tuple of the values a custom callback
/// receives. `default` builds the check's default [`GuardError`] from that
/// context; strategies that produce their own error never call it.
pub trait Strategy<C> {
    type Error;

    fn fail<D>(self, context: C, default: D) -> Self::Error
    where
        D: FnOnce(C, Param<'_>) -> GuardError;
}

impl<C> Strategy<C> for Param<'_> {
    type Error = GuardError;

    #[inline]
    fn fail<D>(self, context: C, default: D) -> GuardError
    where
        D: FnOnce(C, Param<'_>) -> GuardError,
    {
        default(context, self)
    }
}

/// A bare string is the parameter name.
impl<C> Strategy<C> for &str {
    type Error = GuardError;

    #[inline]
    fn fail<D>(self, context: C, default: D) -> GuardError
    where
        D: FnOnce(C, Param<'_>) -> GuardError,
    {
        default(context, Param::named(self))
    }
}

/// A callback that may be absent.
///
/// `None` is a programming error on the caller's side and yields
/// [`crate::ViolationKind::CustomCallbackMissing`], converted into the
/// callback's error type.
impl<C, S> Strategy<C> for Option<S>
where
    S: Strategy<C>,
    S::Error: From<GuardError>,
{
    type Error = S::Error;

    #[inline]
    fn fail<D>(self, context: C, default: D) -> S::Error
    where
        D: FnOnce(C, Param<'_>) -> GuardError,
    {
        match self {
            Some(strategy) => strategy.fail(context, default),
            None => throw::custom_callback_missing(Param::named("failure_callback")).into(),
        }
    }
}

impl<F, E> Strategy<()> for F
where
    F: FnOnce() -> E,
{
    type Error = E;

    #[inline]
    fn fail<D>(self, _context: (), _default: D) -> E
    where
        D: FnOnce((), Param<'_>) -> GuardError,
    {
        self()
    }
}

impl<F, E, A> Strategy<(A,)> for F
where
    F: FnOnce(A) -> E,
{
    type Error = E;

    #[inline]
    fn fail<D>(self, (a,): (A,), _default: D) -> E
    where
        D: FnOnce((A,), Param<'_>) -> GuardError,
    {
        self(a)
    }
}

impl<F, E, A, B> Strategy<(A, B)> for F
where
    F: FnOnce(A, B) -> E,
{
    type Error = E;

    #[inline]
    fn fail<D>(self, (a, b): (A, B), _default: D) -> E
    where
        D: FnOnce((A, B), Param<'_>) -> GuardError,
    {
        self(a, b)
    }
}

impl<F, E, A, B, C3> Strategy<(A, B, C3)> for F
where
    F: FnOnce(A, B, C3) -> E,
{
    type Error = E;

    #[inline]
    fn fail<D>(self, (a, b, c): (A, B, C3), _default: D) -> E
    where
        D: FnOnce((A, B, C3), Param<'_>) -> GuardError,
    {
        self(a, b, c)
    }
}
