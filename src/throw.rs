// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Failure producers: one per violation kind.
//!
//! Each producer renders the default message for its kind and wraps it in a
//! [`GuardError`]. The message embeds the parameter name when one was given,
//! otherwise a generic noun for the category ("The value", "The string",
//! "The collection", ...). A custom message on the [`Param`] wins over the
//! template.
//!
//! These run only on the failure path, so they are all `#[cold]`. The checks
//! in [`crate::check`] call them; they are public so that hand-written guards
//! can produce identical errors.
//!
//! Every public producer carries a doc comment. `cargo xtask doc-lint`
//! enforces that, and `cargo xtask doc-fix` inserts the default one.

use std::borrow::Cow;
use std::fmt::{self, Debug, Write as _};

use regex::Regex;
use url::Url;

use crate::error::{GuardError, Violation};
use crate::range::Range;
use crate::strategy::Param;
use crate::text::StringComparison;

const THE_VALUE: &str = "The value";
const THE_NULLABLE: &str = "The nullable";
const THE_REFERENCE: &str = "The reference";
const THE_STRING: &str = "The string";
const THE_COLLECTION: &str = "The collection";
const THE_TYPE: &str = "The type";
const THE_URI: &str = "The URI";

/// Resolve the message (custom or templated) and assemble the error.
fn produce(
    param: Param<'_>,
    noun: &str,
    violation: Violation,
    template: impl FnOnce(&str) -> String,
) -> GuardError {
    let message = match param.custom_message() {
        Some(message) => message.to_owned(),
        None => template(param.name().unwrap_or(noun)),
    };
    GuardError::new(violation, param.name().map(str::to_owned), message)
}

fn render<T: Debug + ?Sized>(value: &T) -> String {
    format!("{:?}", value)
}

fn render_items<T: Debug>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| render(item)).collect()
}

/// One item per line, comma separated, followed by a newline.
fn append_items_with_new_line(message: &mut String, items: &[String]) {
    for (index, item) in items.iter().enumerate() {
        message.push_str(item);
        if index + 1 < items.len() {
            message.push(',');
        }
        message.push('\n');
    }
}

fn append_collection_content(message: &mut String, items: &[String]) {
    message.push_str("Content of the collection:\n");
    append_items_with_new_line(message, items);
}

/// Wraps a rendered value in quotes unless `Debug` already quoted it.
fn quoted(rendered: &str) -> Cow<'_, str> {
    if rendered.starts_with('"') {
        Cow::Borrowed(rendered)
    } else {
        Cow::Owned(format!("\"{}\"", rendered))
    }
}

/// ` (OrdinalIgnoreCase)` or nothing.
struct ComparisonSuffix(Option<StringComparison>);

impl fmt::Display for ComparisonSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(comparison) => write!(f, " ({})", comparison),
            None => Ok(()),
        }
    }
}

// ============================================================================
// PRESENCE
// ============================================================================

/// Builds the error for an absent value (`None` where a value is required).
#[cold]
pub fn argument_null(param: Param<'_>) -> GuardError {
    produce(param, THE_VALUE, Violation::Null, |name| {
        format!("{} must not be null.", name)
    })
}

/// Builds the error for a value equal to its type's default.
#[cold]
pub fn argument_default(param: Param<'_>) -> GuardError {
    produce(param, THE_VALUE, Violation::DefaultValue, |name| {
        format!("{} must not be the default value.", name)
    })
}

/// Builds the error for an optional value that has no value.
#[cold]
pub fn nullable_has_no_value(param: Param<'_>) -> GuardError {
    produce(param, THE_NULLABLE, Violation::NullableNoValue, |name| {
        format!("{} must have a value, but it actually is null.", name)
    })
}

/// Builds the error for a nil UUID.
#[cold]
pub fn empty_uuid(param: Param<'_>) -> GuardError {
    produce(param, THE_VALUE, Violation::EmptyUuid, |name| {
        format!(
            "{} must be a valid UUID, but it actually is an empty one.",
            name
        )
    })
}

// ============================================================================
// COMPARISON
// ============================================================================

fn out_of_range<T: Debug + ?Sized>(
    value: &T,
    boundary: String,
    relation: &str,
    param: Param<'_>,
) -> GuardError {
    let actual = render(value);
    let message_actual = actual.clone();
    let message_boundary = boundary.clone();
    produce(
        param,
        THE_VALUE,
        Violation::OutOfRange { actual, boundary },
        |name| {
            format!(
                "{} {} {}, but it actually is {}.",
                name, relation, message_boundary, message_actual
            )
        },
    )
}

/// Builds the error for a value that is less than the boundary it must not be below.
#[cold]
pub fn must_not_be_less_than<T: Debug + ?Sized>(
    value: &T,
    boundary: &T,
    param: Param<'_>,
) -> GuardError {
    out_of_range(value, render(boundary), "must not be less than", param)
}

/// Builds the error for a value that is not less than the boundary.
#[cold]
pub fn must_be_less_than<T: Debug + ?Sized>(value: &T, boundary: &T, param: Param<'_>) -> GuardError {
    out_of_range(value, render(boundary), "must be less than", param)
}

/// Builds the error for a value that is less than or equal to the boundary.
#[cold]
pub fn must_not_be_less_than_or_equal_to<T: Debug + ?Sized>(
    value: &T,
    boundary: &T,
    param: Param<'_>,
) -> GuardError {
    out_of_range(
        value,
        render(boundary),
        "must not be less than or equal to",
        param,
    )
}

/// Builds the error for a value that is greater than the boundary it must not exceed.
#[cold]
pub fn must_be_less_than_or_equal_to<T: Debug + ?Sized>(
    value: &T,
    boundary: &T,
    param: Param<'_>,
) -> GuardError {
    out_of_range(
        value,
        render(boundary),
        "must be less than or equal to",
        param,
    )
}

/// Builds the error for a value that is greater than or equal to the boundary.
#[cold]
pub fn must_not_be_greater_than_or_equal_to<T: Debug + ?Sized>(
    value: &T,
    boundary: &T,
    param: Param<'_>,
) -> GuardError {
    out_of_range(
        value,
        render(boundary),
        "must not be greater than or equal to",
        param,
    )
}

/// Builds the error for a value that is less than the required minimum.
#[cold]
pub fn must_be_greater_than_or_equal_to<T: Debug + ?Sized>(
    value: &T,
    boundary: &T,
    param: Param<'_>,
) -> GuardError {
    out_of_range(
        value,
        render(boundary),
        "must be greater than or equal to",
        param,
    )
}

/// Builds the error for a value that is not greater than the boundary.
#[cold]
pub fn must_be_greater_than<T: Debug + ?Sized>(
    value: &T,
    boundary: &T,
    param: Param<'_>,
) -> GuardError {
    out_of_range(value, render(boundary), "must be greater than", param)
}

/// Builds the error for a value that is greater than the boundary it must not exceed.
#[cold]
pub fn must_not_be_greater_than<T: Debug + ?Sized>(
    value: &T,
    boundary: &T,
    param: Param<'_>,
) -> GuardError {
    out_of_range(value, render(boundary), "must not be greater than", param)
}

/// Builds the error for a value outside of a range.
#[cold]
pub fn must_be_in_range<T: Debug>(value: &T, range: &Range<T>, param: Param<'_>) -> GuardError {
    out_of_range(value, range.to_string(), "must be between", param)
}

/// Builds the error for a value inside a range it must stay out of.
#[cold]
pub fn must_not_be_in_range<T: Debug>(value: &T, range: &Range<T>, param: Param<'_>) -> GuardError {
    out_of_range(value, range.to_string(), "must not be between", param)
}

/// Builds the error for a value that differs from the expected one.
#[cold]
pub fn values_not_equal<T: Debug + ?Sized>(value: &T, other: &T, param: Param<'_>) -> GuardError {
    let actual = render(value);
    let expected = render(other);
    let message = format!("must be equal to {}, but it actually is {}.", expected, actual);
    produce(
        param,
        THE_VALUE,
        Violation::ValuesNotEqual { actual, expected },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a value equal to one it must differ from.
#[cold]
pub fn values_equal<T: Debug + ?Sized>(value: &T, other: &T, param: Param<'_>) -> GuardError {
    let actual = render(value);
    let other = render(other);
    let message = format!("must not be equal to {}, but it actually is {}.", other, actual);
    produce(
        param,
        THE_VALUE,
        Violation::ValuesEqual { actual, other },
        |name| format!("{} {}", name, message),
    )
}

// ============================================================================
// IDENTITY
// ============================================================================

/// Builds the error for two references that point to the same object.
#[cold]
pub fn same_object_reference<T: Debug + ?Sized>(value: &T, param: Param<'_>) -> GuardError {
    let actual = render(value);
    let message = format!(
        "must not point to object {}, but it actually does.",
        actual
    );
    produce(
        param,
        THE_REFERENCE,
        Violation::SameReference { actual },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a reference that does not point to the expected object.
#[cold]
pub fn different_object_reference<T: Debug + ?Sized>(
    value: &T,
    expected: &T,
    param: Param<'_>,
) -> GuardError {
    let actual = render(value);
    let expected = render(expected);
    let message = format!(
        "must point to object {}, but it actually points to {}.",
        expected, actual
    );
    produce(
        param,
        THE_REFERENCE,
        Violation::DifferentReference { actual, expected },
        |name| format!("{} {}", name, message),
    )
}

// ============================================================================
// STRINGS
// ============================================================================

/// Builds the error for an empty string.
#[cold]
pub fn empty_string(param: Param<'_>) -> GuardError {
    produce(param, THE_STRING, Violation::EmptyString, |name| {
        format!("{} must not be an empty string, but it actually is.", name)
    })
}

/// Builds the error for a string made of white space only.
#[cold]
pub fn white_space_string(value: &str, param: Param<'_>) -> GuardError {
    let message = format!(
        "must not contain only white space, but it actually is {:?}.",
        value
    );
    produce(
        param,
        THE_STRING,
        Violation::WhiteSpaceString {
            actual: value.to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a string that does not match a regular expression.
#[cold]
pub fn string_does_not_match(value: &str, regex: &Regex, param: Param<'_>) -> GuardError {
    let message = format!(
        "must match the regular expression {:?}, but it actually is {:?}.",
        regex.as_str(),
        value
    );
    produce(
        param,
        THE_STRING,
        Violation::StringMismatch {
            actual: value.to_owned(),
            pattern: regex.as_str().to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a string missing a required substring.
#[cold]
pub fn string_does_not_contain(
    value: &str,
    substring: &str,
    comparison: Option<StringComparison>,
    param: Param<'_>,
) -> GuardError {
    let message = format!(
        "must contain {:?}{}, but it actually is {:?}.",
        substring,
        ComparisonSuffix(comparison),
        value
    );
    produce(
        param,
        THE_STRING,
        Violation::SubstringMissing {
            actual: value.to_owned(),
            substring: substring.to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a string containing a forbidden substring.
#[cold]
pub fn string_contains(
    value: &str,
    substring: &str,
    comparison: Option<StringComparison>,
    param: Param<'_>,
) -> GuardError {
    let message = format!(
        "must not contain {:?} as a substring{}, but it actually is {:?}.",
        substring,
        ComparisonSuffix(comparison),
        value
    );
    produce(
        param,
        THE_STRING,
        Violation::SubstringPresent {
            actual: value.to_owned(),
            substring: substring.to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a string that is not a substring of another one.
#[cold]
pub fn not_substring(
    value: &str,
    other: &str,
    comparison: Option<StringComparison>,
    param: Param<'_>,
) -> GuardError {
    let message = format!(
        "must be a substring of {:?}{}, but it actually is {:?}.",
        other,
        ComparisonSuffix(comparison),
        value
    );
    produce(
        param,
        THE_STRING,
        Violation::NotASubstring {
            actual: value.to_owned(),
            other: other.to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a string that is a substring of one it must not be part of.
#[cold]
pub fn substring(
    value: &str,
    other: &str,
    comparison: Option<StringComparison>,
    param: Param<'_>,
) -> GuardError {
    let message = format!(
        "must not be a substring of {:?}{}, but it actually is {:?}.",
        other,
        ComparisonSuffix(comparison),
        value
    );
    produce(
        param,
        THE_STRING,
        Violation::IsASubstring {
            actual: value.to_owned(),
            other: other.to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for two strings that differ under a comparison mode.
#[cold]
pub fn strings_not_equal(
    value: &str,
    other: &str,
    comparison: StringComparison,
    param: Param<'_>,
) -> GuardError {
    let message = format!(
        "must be equal to {:?} ({}), but it actually is {:?}.",
        other, comparison, value
    );
    produce(
        param,
        THE_STRING,
        Violation::ValuesNotEqual {
            actual: value.to_owned(),
            expected: other.to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for two strings that are equal under a comparison mode.
#[cold]
pub fn strings_equal(
    value: &str,
    other: &str,
    comparison: StringComparison,
    param: Param<'_>,
) -> GuardError {
    let message = format!(
        "must not be equal to {:?} ({}), but it actually is {:?}.",
        other, comparison, value
    );
    produce(
        param,
        THE_STRING,
        Violation::ValuesEqual {
            actual: value.to_owned(),
            other: other.to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

// ============================================================================
// COLLECTIONS
// ============================================================================

/// Builds the error for an empty collection.
#[cold]
pub fn empty_collection(param: Param<'_>) -> GuardError {
    produce(param, THE_COLLECTION, Violation::EmptyCollection, |name| {
        format!(
            "{} must not be an empty collection, but it actually is.",
            name
        )
    })
}

fn collection_count(
    actual: usize,
    expected: usize,
    relation: &str,
    param: Param<'_>,
) -> GuardError {
    produce(
        param,
        THE_COLLECTION,
        Violation::InvalidCollectionCount { actual, expected },
        |name| {
            format!(
                "{} must have {}count {}, but it actually has count {}.",
                name, relation, expected, actual
            )
        },
    )
}

/// Builds the error for a collection with the wrong number of items.
#[cold]
pub fn invalid_collection_count(actual: usize, expected: usize, param: Param<'_>) -> GuardError {
    collection_count(actual, expected, "", param)
}

/// Builds the error for a collection with fewer items than required.
#[cold]
pub fn invalid_minimum_collection_count(
    actual: usize,
    minimum: usize,
    param: Param<'_>,
) -> GuardError {
    collection_count(actual, minimum, "at least ", param)
}

/// Builds the error for a collection with more items than allowed.
#[cold]
pub fn invalid_maximum_collection_count(
    actual: usize,
    maximum: usize,
    param: Param<'_>,
) -> GuardError {
    collection_count(actual, maximum, "at most ", param)
}

/// Builds the error for a collection that holds the same item twice.
#[cold]
pub fn duplicate_item<T: Debug>(items: &[T], index: usize, param: Param<'_>) -> GuardError {
    let item = render(&items[index]);
    let content = render_items(items);
    let mut message = format!(
        "must be a collection with unique items, but {} at index {} is a duplicate.\n",
        item, index
    );
    append_collection_content(&mut message, &content);
    produce(
        param,
        THE_COLLECTION,
        Violation::DuplicateItem { item, index },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a collection that contains a `None` item.
#[cold]
pub fn null_item<T: Debug>(items: &[Option<T>], index: usize, param: Param<'_>) -> GuardError {
    let content = render_items(items);
    let mut message = format!(
        "must not contain null, but it actually contains null at index {}.\n",
        index
    );
    append_collection_content(&mut message, &content);
    produce(
        param,
        THE_COLLECTION,
        Violation::NullItemInCollection { index },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a collection that lacks a required item.
#[cold]
pub fn missing_item<T: Debug>(items: &[T], item: &T, param: Param<'_>) -> GuardError {
    let item = render(item);
    let mut message = format!("must contain {}, but it actually does not.\n", item);
    append_collection_content(&mut message, &render_items(items));
    produce(
        param,
        THE_COLLECTION,
        Violation::ItemMissing { item },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a collection that contains a forbidden item.
#[cold]
pub fn existing_item<T: Debug>(items: &[T], item: &T, param: Param<'_>) -> GuardError {
    let item = render(item);
    let mut message = format!("must not contain {}, but it actually does.\n", item);
    append_collection_content(&mut message, &render_items(items));
    produce(
        param,
        THE_COLLECTION,
        Violation::ItemPresent { item },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a value that is none of the allowed items.
#[cold]
pub fn value_not_one_of<T: Debug>(value: &T, items: &[T], param: Param<'_>) -> GuardError {
    let actual = render(value);
    let items = render_items(items);
    let mut message = String::from("must be one of the following items\n");
    append_items_with_new_line(&mut message, &items);
    let _ = write!(message, "but it actually is {}.", actual);
    produce(
        param,
        THE_VALUE,
        Violation::ValueNotOneOf { actual, items },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a value that is one of the forbidden items.
#[cold]
pub fn value_is_one_of<T: Debug>(value: &T, items: &[T], param: Param<'_>) -> GuardError {
    let actual = render(value);
    let items = render_items(items);
    let mut message = String::from("must not be one of the following items\n");
    append_items_with_new_line(&mut message, &items);
    let _ = write!(message, "but it actually is {}.", actual);
    produce(
        param,
        THE_VALUE,
        Violation::ValueIsOneOf { actual, items },
        |name| format!("{} {}", name, message),
    )
}

// ============================================================================
// TYPES AND ENUMS
// ============================================================================

/// Builds the error for a type that is not an enum.
#[cold]
pub fn type_is_no_enum(type_name: &str, param: Param<'_>) -> GuardError {
    let message = format!(
        "{:?} must be an enum type, but it actually is not.",
        type_name
    );
    produce(
        param,
        THE_TYPE,
        Violation::NotAnEnumType {
            type_name: type_name.to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a raw discriminant or name that denotes no variant of its enum.
#[cold]
pub fn enum_value_not_defined<V: Debug + ?Sized>(
    value: &V,
    enum_name: &str,
    param: Param<'_>,
) -> GuardError {
    let value = render(value);
    let message = format!(
        "{} must be one of the defined constants of enum {:?}, but it actually is not.",
        quoted(&value),
        enum_name
    );
    produce(
        param,
        THE_VALUE,
        Violation::EnumValueUndefined {
            enum_name: enum_name.to_owned(),
            value,
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a value that cannot be cast to the target type.
#[cold]
pub fn invalid_type_cast(target_type: &str, param: Param<'_>) -> GuardError {
    let message = format!("cannot be cast to {:?}.", target_type);
    produce(
        param,
        THE_VALUE,
        Violation::InvalidTypeCast {
            target_type: target_type.to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

// ============================================================================
// URIS
// ============================================================================

/// Builds the error for a relative URI where an absolute one is required.
#[cold]
pub fn must_be_absolute_uri(value: &str, param: Param<'_>) -> GuardError {
    let message = format!(
        "must be an absolute URI, but it actually is {:?}.",
        value
    );
    produce(
        param,
        THE_URI,
        Violation::AbsoluteUriExpected {
            actual: value.to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for an absolute URI where a relative one is required.
#[cold]
pub fn must_be_relative_uri(value: &str, param: Param<'_>) -> GuardError {
    let message = format!("must be a relative URI, but it actually is {:?}.", value);
    produce(
        param,
        THE_URI,
        Violation::RelativeUriExpected {
            actual: value.to_owned(),
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a URI with an unexpected scheme.
#[cold]
pub fn uri_must_have_scheme(url: &Url, scheme: &str, param: Param<'_>) -> GuardError {
    let message = format!(
        "must use the scheme {:?}, but it actually is {:?}.",
        scheme,
        url.as_str()
    );
    produce(
        param,
        THE_URI,
        Violation::InvalidUriScheme {
            actual: url.as_str().to_owned(),
            expected: vec![scheme.to_owned()],
        },
        |name| format!("{} {}", name, message),
    )
}

/// Builds the error for a URI that uses none of the allowed schemes.
#[cold]
pub fn uri_must_have_one_scheme_of(url: &Url, schemes: &[&str], param: Param<'_>) -> GuardError {
    let expected: Vec<String> = schemes.iter().map(|scheme| (*scheme).to_owned()).collect();
    let mut message = String::from("must use one of the following schemes\n");
    append_items_with_new_line(&mut message, &expected);
    let _ = write!(message, "but it actually is {:?}.", url.as_str());
    produce(
        param,
        THE_URI,
        Violation::InvalidUriScheme {
            actual: url.as_str().to_owned(),
            expected,
        },
        |name| format!("{} {}", name, message),
    )
}

// ============================================================================
// STATE AND PROTOCOL
// ============================================================================

/// Builds the error for an operation invoked in the wrong state. Only the message is used.
#[cold]
pub fn invalid_operation(param: Param<'_>) -> GuardError {
    let message = param
        .custom_message()
        .unwrap_or("The operation is not valid in the current state of the object.");
    GuardError::new(Violation::InvalidOperation, None, message)
}

/// Builds the error for an object whose state is invalid. Only the message is used.
#[cold]
pub fn invalid_state(param: Param<'_>) -> GuardError {
    let message = param
        .custom_message()
        .unwrap_or("The object is in an invalid state.");
    GuardError::new(Violation::InvalidState, None, message)
}

/// Builds the error for a custom failure callback that was not supplied.
#[cold]
pub fn custom_callback_missing(param: Param<'_>) -> GuardError {
    produce(param, THE_VALUE, Violation::CustomCallbackMissing, |name| {
        format!("{} must not be null.", name)
    })
}
