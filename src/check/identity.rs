// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Identity checks: two references to the same object, not two equal values.

use std::fmt::Debug;
use std::ptr;

use crate::strategy::Strategy;
use crate::throw;

/// Checks on `&T` that compare addresses with [`ptr::eq`].
///
/// For unsized `T` the comparison includes the pointer metadata, so two
/// slices starting at the same address but with different lengths are
/// different objects.
pub trait ReferenceGuards<'a, T: ?Sized> {
    /// Fails with `DifferentReference` unless both point to the same object.
    fn must_be_same_as<S>(self, other: &'a T, strategy: S) -> Result<&'a T, S::Error>
    where
        S: Strategy<(&'a T, &'a T)>;

    /// Fails with `SameReference` when both point to the same object.
    fn must_not_be_same_as<S>(self, other: &'a T, strategy: S) -> Result<&'a T, S::Error>
    where
        S: Strategy<(&'a T, &'a T)>;
}

impl<'a, T: ?Sized + Debug> ReferenceGuards<'a, T> for &'a T {
    #[inline]
    fn must_be_same_as<S>(self, other: &'a T, strategy: S) -> Result<&'a T, S::Error>
    where
        S: Strategy<(&'a T, &'a T)>,
    {
        if ptr::eq(self, other) {
            Ok(self)
        } else {
            Err(strategy.fail((self, other), |(value, other), param| {
                throw::different_object_reference(value, other, param)
            }))
        }
    }

    #[inline]
    fn must_not_be_same_as<S>(self, other: &'a T, strategy: S) -> Result<&'a T, S::Error>
    where
        S: Strategy<(&'a T, &'a T)>,
    {
        if ptr::eq(self, other) {
            Err(strategy.fail((self, other), |(value, _), param| {
                throw::same_object_reference(value, param)
            }))
        } else {
            Ok(self)
        }
    }
}
