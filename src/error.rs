// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The violation taxonomy.
//!
//! Every failed guard returns a [`GuardError`]. The error carries three things:
//! which precondition broke ([`Violation`], with the offending values rendered
//! into structured fields), the parameter name when the caller supplied one,
//! and the final human-readable message.
//!
//! Callers that only care about *which* guard fired match on
//! [`GuardError::kind`]; callers that want the values match on
//! [`GuardError::violation`]. Neither needs to look at the message text.
//!
//! | Category     | Kinds                                                            |
//! |--------------|------------------------------------------------------------------|
//! | `Presence`   | `Null`, `DefaultValue`, `NullableNoValue`, `EmptyUuid`           |
//! | `Comparison` | `OutOfRange`, `ValuesNotEqual`, `ValuesEqual`                    |
//! | `Identity`   | `SameReference`, `DifferentReference`                            |
//! | `String`     | `EmptyString`, `WhiteSpaceString`, `StringMismatch`, substrings  |
//! | `Collection` | `EmptyCollection`, `DuplicateItem`, `NullItemInCollection`, ...  |
//! | `Type`       | `NotAnEnumType`, `EnumValueUndefined`, `InvalidTypeCast`         |
//! | `Uri`        | `AbsoluteUriExpected`, `RelativeUriExpected`, `InvalidUriScheme` |
//! | `State`      | `InvalidOperation`, `InvalidState`                               |
//! | `Protocol`   | `CustomCallbackMissing`                                          |

use serde::{Deserialize, Serialize};
use std::fmt;

/// A failed guard clause.
///
/// Immutable once built. Construct it through the producers in [`crate::throw`]
/// so the message follows the default template, or through [`GuardError::new`]
/// when you already have a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GuardError {
    violation: Violation,
    parameter_name: Option<String>,
    message: String,
}

impl GuardError {
    pub fn new(
        violation: Violation,
        parameter_name: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation,
            parameter_name,
            message: message.into(),
        }
    }

    /// The violated precondition with its structured fields.
    pub fn violation(&self) -> &Violation {
        &self.violation
    }

    /// Stable identifier of the violated precondition.
    pub fn kind(&self) -> ViolationKind {
        self.violation.kind()
    }

    pub fn parameter_name(&self) -> Option<&str> {
        self.parameter_name.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Shorthand for `self.kind() == kind`.
    pub fn is(&self, kind: ViolationKind) -> bool {
        self.kind() == kind
    }
}

/// The violated precondition, one variant per kind.
///
/// Generic values are rendered with their `Debug` representation when the
/// error is built, so the error stays `'static` and independent of the checked
/// type. Checked strings and URIs are stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Violation {
    Null,
    DefaultValue,
    NullableNoValue,
    EmptyUuid,
    /// A value failed an ordering comparison or a range check.
    ///
    /// `boundary` is the rendered boundary value, or for range checks the
    /// rendered range (`1 (inclusive) and 10 (exclusive)`).
    OutOfRange {
        actual: String,
        boundary: String,
    },
    ValuesNotEqual {
        actual: String,
        expected: String,
    },
    ValuesEqual {
        actual: String,
        other: String,
    },
    SameReference {
        actual: String,
    },
    DifferentReference {
        actual: String,
        expected: String,
    },
    EmptyString,
    WhiteSpaceString {
        actual: String,
    },
    StringMismatch {
        actual: String,
        pattern: String,
    },
    SubstringMissing {
        actual: String,
        substring: String,
    },
    SubstringPresent {
        actual: String,
        substring: String,
    },
    NotASubstring {
        actual: String,
        other: String,
    },
    IsASubstring {
        actual: String,
        other: String,
    },
    EmptyCollection,
    /// `index` is the position of the second occurrence.
    DuplicateItem {
        item: String,
        index: usize,
    },
    NullItemInCollection {
        index: usize,
    },
    InvalidCollectionCount {
        actual: usize,
        expected: usize,
    },
    ItemMissing {
        item: String,
    },
    ItemPresent {
        item: String,
    },
    ValueNotOneOf {
        actual: String,
        items: Vec<String>,
    },
    ValueIsOneOf {
        actual: String,
        items: Vec<String>,
    },
    NotAnEnumType {
        type_name: String,
    },
    /// `value` is the rendered raw input: a discriminant or a name.
    EnumValueUndefined {
        enum_name: String,
        value: String,
    },
    InvalidTypeCast {
        target_type: String,
    },
    AbsoluteUriExpected {
        actual: String,
    },
    RelativeUriExpected {
        actual: String,
    },
    InvalidUriScheme {
        actual: String,
        expected: Vec<String>,
    },
    InvalidOperation,
    InvalidState,
    CustomCallbackMissing,
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::Null => ViolationKind::Null,
            Violation::DefaultValue => ViolationKind::DefaultValue,
            Violation::NullableNoValue => ViolationKind::NullableNoValue,
            Violation::EmptyUuid => ViolationKind::EmptyUuid,
            Violation::OutOfRange { .. } => ViolationKind::OutOfRange,
            Violation::ValuesNotEqual { .. } => ViolationKind::ValuesNotEqual,
            Violation::ValuesEqual { .. } => ViolationKind::ValuesEqual,
            Violation::SameReference { .. } => ViolationKind::SameReference,
            Violation::DifferentReference { .. } => ViolationKind::DifferentReference,
            Violation::EmptyString => ViolationKind::EmptyString,
            Violation::WhiteSpaceString { .. } => ViolationKind::WhiteSpaceString,
            Violation::StringMismatch { .. } => ViolationKind::StringMismatch,
            Violation::SubstringMissing { .. } => ViolationKind::SubstringMissing,
            Violation::SubstringPresent { .. } => ViolationKind::SubstringPresent,
            Violation::NotASubstring { .. } => ViolationKind::NotASubstring,
            Violation::IsASubstring { .. } => ViolationKind::IsASubstring,
            Violation::EmptyCollection => ViolationKind::EmptyCollection,
            Violation::DuplicateItem { .. } => ViolationKind::DuplicateItem,
            Violation::NullItemInCollection { .. } => ViolationKind::NullItemInCollection,
            Violation::InvalidCollectionCount { .. } => ViolationKind::InvalidCollectionCount,
            Violation::ItemMissing { .. } => ViolationKind::ItemMissing,
            Violation::ItemPresent { .. } => ViolationKind::ItemPresent,
            Violation::ValueNotOneOf { .. } => ViolationKind::ValueNotOneOf,
            Violation::ValueIsOneOf { .. } => ViolationKind::ValueIsOneOf,
            Violation::NotAnEnumType { .. } => ViolationKind::NotAnEnumType,
            Violation::EnumValueUndefined { .. } => ViolationKind::EnumValueUndefined,
            Violation::InvalidTypeCast { .. } => ViolationKind::InvalidTypeCast,
            Violation::AbsoluteUriExpected { .. } => ViolationKind::AbsoluteUriExpected,
            Violation::RelativeUriExpected { .. } => ViolationKind::RelativeUriExpected,
            Violation::InvalidUriScheme { .. } => ViolationKind::InvalidUriScheme,
            Violation::InvalidOperation => ViolationKind::InvalidOperation,
            Violation::InvalidState => ViolationKind::InvalidState,
            Violation::CustomCallbackMissing => ViolationKind::CustomCallbackMissing,
        }
    }
}

/// Stable, fieldless identifier for each [`Violation`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ViolationKind {
    Null,
    DefaultValue,
    NullableNoValue,
    EmptyUuid,
    OutOfRange,
    ValuesNotEqual,
    ValuesEqual,
    SameReference,
    DifferentReference,
    EmptyString,
    WhiteSpaceString,
    StringMismatch,
    SubstringMissing,
    SubstringPresent,
    NotASubstring,
    IsASubstring,
    EmptyCollection,
    DuplicateItem,
    NullItemInCollection,
    InvalidCollectionCount,
    ItemMissing,
    ItemPresent,
    ValueNotOneOf,
    ValueIsOneOf,
    NotAnEnumType,
    EnumValueUndefined,
    InvalidTypeCast,
    AbsoluteUriExpected,
    RelativeUriExpected,
    InvalidUriScheme,
    InvalidOperation,
    InvalidState,
    CustomCallbackMissing,
}

impl ViolationKind {
    /// Snake-case name, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            ViolationKind::Null => "null",
            ViolationKind::DefaultValue => "default_value",
            ViolationKind::NullableNoValue => "nullable_no_value",
            ViolationKind::EmptyUuid => "empty_uuid",
            ViolationKind::OutOfRange => "out_of_range",
            ViolationKind::ValuesNotEqual => "values_not_equal",
            ViolationKind::ValuesEqual => "values_equal",
            ViolationKind::SameReference => "same_reference",
            ViolationKind::DifferentReference => "different_reference",
            ViolationKind::EmptyString => "empty_string",
            ViolationKind::WhiteSpaceString => "white_space_string",
            ViolationKind::StringMismatch => "string_mismatch",
            ViolationKind::SubstringMissing => "substring_missing",
            ViolationKind::SubstringPresent => "substring_present",
            ViolationKind::NotASubstring => "not_a_substring",
            ViolationKind::IsASubstring => "is_a_substring",
            ViolationKind::EmptyCollection => "empty_collection",
            ViolationKind::DuplicateItem => "duplicate_item",
            ViolationKind::NullItemInCollection => "null_item_in_collection",
            ViolationKind::InvalidCollectionCount => "invalid_collection_count",
            ViolationKind::ItemMissing => "item_missing",
            ViolationKind::ItemPresent => "item_present",
            ViolationKind::ValueNotOneOf => "value_not_one_of",
            ViolationKind::ValueIsOneOf => "value_is_one_of",
            ViolationKind::NotAnEnumType => "not_an_enum_type",
            ViolationKind::EnumValueUndefined => "enum_value_undefined",
            ViolationKind::InvalidTypeCast => "invalid_type_cast",
            ViolationKind::AbsoluteUriExpected => "absolute_uri_expected",
            ViolationKind::RelativeUriExpected => "relative_uri_expected",
            ViolationKind::InvalidUriScheme => "invalid_uri_scheme",
            ViolationKind::InvalidOperation => "invalid_operation",
            ViolationKind::InvalidState => "invalid_state",
            ViolationKind::CustomCallbackMissing => "custom_callback_missing",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            ViolationKind::Null
            | ViolationKind::DefaultValue
            | ViolationKind::NullableNoValue
            | ViolationKind::EmptyUuid => Category::Presence,
            ViolationKind::OutOfRange | ViolationKind::ValuesNotEqual | ViolationKind::ValuesEqual => {
                Category::Comparison
            }
            ViolationKind::SameReference | ViolationKind::DifferentReference => Category::Identity,
            ViolationKind::EmptyString
            | ViolationKind::WhiteSpaceString
            | ViolationKind::StringMismatch
            | ViolationKind::SubstringMissing
            | ViolationKind::SubstringPresent
            | ViolationKind::NotASubstring
            | ViolationKind::IsASubstring => Category::String,
            ViolationKind::EmptyCollection
            | ViolationKind::DuplicateItem
            | ViolationKind::NullItemInCollection
            | ViolationKind::InvalidCollectionCount
            | ViolationKind::ItemMissing
            | ViolationKind::ItemPresent
            | ViolationKind::ValueNotOneOf
            | ViolationKind::ValueIsOneOf => Category::Collection,
            ViolationKind::NotAnEnumType
            | ViolationKind::EnumValueUndefined
            | ViolationKind::InvalidTypeCast => Category::Type,
            ViolationKind::AbsoluteUriExpected
            | ViolationKind::RelativeUriExpected
            | ViolationKind::InvalidUriScheme => Category::Uri,
            ViolationKind::InvalidOperation | ViolationKind::InvalidState => Category::State,
            ViolationKind::CustomCallbackMissing => Category::Protocol,
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse grouping of violation kinds, mirroring the check catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Presence,
    Comparison,
    Identity,
    String,
    Collection,
    Type,
    Uri,
    State,
    /// Misuse of the guard API itself rather than a bad argument.
    Protocol,
}
