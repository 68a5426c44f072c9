// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Enum metadata and runtime type descriptors.
//!
//! Rust enums cannot hold undefined values, but raw discriminants arriving
//! from the outside (config files, FFI, wire formats) can. [`EnumType`]
//! exposes an enum's defined variants so such a raw value can be checked and
//! converted in one step:
//!
//! ```
//! use guardclause::EnumType;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, EnumType)]
//! enum Level {
//!     Low = 1,
//!     High = 5,
//! }
//!
//! assert_eq!(Level::must_be_valid_enum_value(5, "level")?, Level::High);
//! assert!(Level::must_be_valid_enum_value(2, "level").is_err());
//! # Ok::<(), guardclause::GuardError>(())
//! ```
//!
//! [`TypeInfo`] is a runtime type descriptor. Only descriptors built with
//! [`TypeInfo::of_enum`] (or [`EnumType::type_info`]) describe an enum.

use std::any::{type_name, TypeId};

use crate::strategy::Strategy;
use crate::throw;

/// An enum without fields whose defined variants are known.
///
/// Derive it with `#[derive(EnumType)]` rather than implementing it by hand;
/// the derive keeps `VARIANTS`, `VARIANT_NAMES` and `discriminant` in sync.
pub trait EnumType: Copy + 'static {
    /// The enum's name as written in source.
    const NAME: &'static str;
    /// Variant names in declaration order.
    const VARIANT_NAMES: &'static [&'static str];
    /// Variants in declaration order.
    const VARIANTS: &'static [Self];

    fn discriminant(&self) -> i64;

    fn variant_name(&self) -> &'static str;

    /// The first variant whose discriminant equals `raw`.
    fn from_discriminant(raw: i64) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.discriminant() == raw)
    }

    fn is_valid_enum_value(raw: i64) -> bool {
        Self::from_discriminant(raw).is_some()
    }

    /// Converts `raw` into the variant it denotes, or fails with
    /// `EnumValueUndefined`. A custom callback receives `(raw,)`.
    fn must_be_valid_enum_value<S>(raw: i64, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(i64,)>,
    {
        match Self::from_discriminant(raw) {
            Some(variant) => Ok(variant),
            None => Err(strategy.fail((raw,), |(raw,), param| {
                throw::enum_value_not_defined(&raw, Self::NAME, param)
            })),
        }
    }

    fn type_info() -> TypeInfo {
        TypeInfo::of_enum::<Self>()
    }
}

/// Runtime descriptor of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    name: &'static str,
    id: TypeId,
    enum_variants: Option<&'static [&'static str]>,
}

impl TypeInfo {
    /// Describes `T` without enum metadata, even when `T` is an enum.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
            enum_variants: None,
        }
    }

    pub fn of_enum<E: EnumType>() -> Self {
        Self {
            name: type_name::<E>(),
            id: TypeId::of::<E>(),
            enum_variants: Some(E::VARIANT_NAMES),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn is_enum(&self) -> bool {
        self.enum_variants.is_some()
    }

    pub fn enum_variants(&self) -> Option<&'static [&'static str]> {
        self.enum_variants
    }
}
