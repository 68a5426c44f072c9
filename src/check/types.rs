// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type checks: enum descriptors and downcasts.
//!
//! Raw enum values are checked through
//! [`EnumType::must_be_valid_enum_value`](crate::EnumType::must_be_valid_enum_value).

use std::any::{type_name, Any};

use crate::enums::TypeInfo;
use crate::strategy::Strategy;
use crate::throw;

pub trait TypeGuards: Sized {
    /// Fails with `NotAnEnumType` unless the descriptor describes an enum.
    ///
    /// Only [`TypeInfo::of_enum`] and [`EnumType::type_info`](crate::EnumType::type_info)
    /// build enum descriptors. [`TypeInfo::of`] has no enum metadata, so it
    /// fails here even for an enum type:
    ///
    /// ```
    /// use guardclause::prelude::*;
    ///
    /// assert!(TypeInfo::of_enum::<StringComparison>().must_be_enum_type("t").is_ok());
    /// assert!(StringComparison::type_info().must_be_enum_type("t").is_ok());
    /// assert!(TypeInfo::of::<StringComparison>().must_be_enum_type("t").is_err());
    /// ```
    fn must_be_enum_type<S: Strategy<(Self,)>>(self, strategy: S) -> Result<Self, S::Error>;
}

impl TypeGuards for TypeInfo {
    fn must_be_enum_type<S: Strategy<(Self,)>>(self, strategy: S) -> Result<Self, S::Error> {
        if self.is_enum() {
            Ok(self)
        } else {
            Err(strategy.fail((self,), |(info,), param| {
                throw::type_is_no_enum(info.name(), param)
            }))
        }
    }
}

/// Downcast checks on `&dyn Any`.
pub trait AnyGuards<'a> {
    /// Fails with `InvalidTypeCast` unless the value is a `T`.
    ///
    /// ```
    /// use std::any::Any;
    /// use guardclause::AnyGuards;
    ///
    /// let value: &dyn Any = &42_u32;
    /// assert_eq!(value.must_be_castable_to::<u32, _>("value"), Ok(&42));
    /// assert!(value.must_be_castable_to::<i64, _>("value").is_err());
    /// ```
    fn must_be_castable_to<T: Any, S>(self, strategy: S) -> Result<&'a T, S::Error>
    where
        S: Strategy<(&'a dyn Any,)>;
}

impl<'a> AnyGuards<'a> for &'a dyn Any {
    fn must_be_castable_to<T: Any, S>(self, strategy: S) -> Result<&'a T, S::Error>
    where
        S: Strategy<(&'a dyn Any,)>,
    {
        match self.downcast_ref::<T>() {
            Some(value) => Ok(value),
            None => Err(strategy.fail((self,), |_, param| {
                throw::invalid_type_cast(type_name::<T>(), param)
            })),
        }
    }
}
