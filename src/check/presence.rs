// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Presence checks: `None` and the nil UUID.

use uuid::Uuid;

use crate::strategy::Strategy;
use crate::throw;

/// Checks on `Option<T>`. Success unwraps the value.
///
/// A custom callback takes no arguments, there is nothing to hand it.
pub trait OptionGuards<T> {
    /// `None` fails with `Null`.
    fn must_not_be_null<S: Strategy<()>>(self, strategy: S) -> Result<T, S::Error>;

    /// `None` fails with `NullableNoValue`.
    fn must_have_value<S: Strategy<()>>(self, strategy: S) -> Result<T, S::Error>;
}

impl<T> OptionGuards<T> for Option<T> {
    #[inline]
    fn must_not_be_null<S: Strategy<()>>(self, strategy: S) -> Result<T, S::Error> {
        match self {
            Some(value) => Ok(value),
            None => Err(strategy.fail((), |(), param| throw::argument_null(param))),
        }
    }

    #[inline]
    fn must_have_value<S: Strategy<()>>(self, strategy: S) -> Result<T, S::Error> {
        match self {
            Some(value) => Ok(value),
            None => Err(strategy.fail((), |(), param| throw::nullable_has_no_value(param))),
        }
    }
}

pub trait UuidGuards: Sized {
    /// The nil UUID fails with `EmptyUuid`.
    fn must_not_be_empty<S: Strategy<(Self,)>>(self, strategy: S) -> Result<Self, S::Error>;
}

impl UuidGuards for Uuid {
    #[inline]
    fn must_not_be_empty<S: Strategy<(Self,)>>(self, strategy: S) -> Result<Self, S::Error> {
        if self.is_nil() {
            Err(strategy.fail((self,), |_, param| throw::empty_uuid(param)))
        } else {
            Ok(self)
        }
    }
}
