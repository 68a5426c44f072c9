//! String checks through the public API.

use std::borrow::Cow;

use crate::common::{expect_kind, expect_violation};
use guardclause::prelude::*;
use guardclause::Violation;
use regex::Regex;

#[test]
fn owned_borrowed_and_optional_strings_share_the_checks() {
    assert_eq!("a".must_not_be_null_or_empty("s"), Ok("a"));
    assert_eq!(String::from("a").must_not_be_null_or_empty("s"), Ok(String::from("a")));
    assert_eq!(Some("a").must_not_be_null_or_empty("s"), Ok(Some("a")));
    let boxed: Box<str> = "a".into();
    assert!(boxed.must_not_be_null_or_empty("s").is_ok());
    assert!(Cow::Borrowed("a").must_not_be_null_or_empty("s").is_ok());
}

#[test]
fn empty_string_message() {
    let error = expect_violation("".must_not_be_null_or_empty("name"), ViolationKind::EmptyString, "name");
    assert_eq!(
        error.message(),
        "name must not be an empty string, but it actually is."
    );
}

#[test]
fn absent_string_is_null() {
    expect_violation(
        None::<String>.must_not_be_null_or_white_space("name"),
        ViolationKind::Null,
        "name",
    );
}

#[test]
fn white_space_only_is_rejected() {
    let error = expect_kind(
        "  \t".must_not_be_null_or_white_space("name"),
        ViolationKind::WhiteSpaceString,
    );
    assert_eq!(
        error.message(),
        "name must not contain only white space, but it actually is \"  \\t\"."
    );
    assert_eq!("  x".must_not_be_null_or_white_space("name"), Ok("  x"));
}

#[test]
fn equality_modes() {
    assert!("a b".must_be("AB", StringComparison::OrdinalIgnoreCaseIgnoreWhiteSpace, "s").is_ok());
    assert!("a b".must_be("ab", StringComparison::OrdinalIgnoreCase, "s").is_err());
    let error = expect_kind(
        "abc".must_not_be("ABC", StringComparison::OrdinalIgnoreCase, "s"),
        ViolationKind::ValuesEqual,
    );
    assert_eq!(
        error.message(),
        "s must not be equal to \"ABC\" (OrdinalIgnoreCase), but it actually is \"abc\"."
    );
}

#[test]
fn regex_mismatch_reports_the_pattern() {
    let pattern = Regex::new("^[a-z]+$").unwrap();
    assert_eq!("abc".must_match(&pattern, "id"), Ok("abc"));
    let error = expect_violation("ab1".must_match(&pattern, "id"), ViolationKind::StringMismatch, "id");
    assert_eq!(
        error.violation(),
        &Violation::StringMismatch {
            actual: "ab1".into(),
            pattern: "^[a-z]+$".into()
        }
    );
}

#[test]
fn contains_message_names_the_mode() {
    let error = expect_kind(
        "Hello".must_contain_by("world", StringComparison::OrdinalIgnoreCase, "greeting"),
        ViolationKind::SubstringMissing,
    );
    assert_eq!(
        error.message(),
        "greeting must contain \"world\" (OrdinalIgnoreCase), but it actually is \"Hello\"."
    );

    let error = expect_kind("Hello".must_contain("x", "greeting"), ViolationKind::SubstringMissing);
    assert_eq!(
        error.message(),
        "greeting must contain \"x\", but it actually is \"Hello\"."
    );
}

#[test]
fn substring_checks() {
    assert!("lo".must_be_substring_of("Hello", "s").is_ok());
    expect_kind("lo".must_not_be_substring_of("Hello", "s"), ViolationKind::IsASubstring);
    expect_kind(
        "LO".must_be_substring_of_by("Hello", StringComparison::Ordinal, "s"),
        ViolationKind::NotASubstring,
    );
    assert!("LO"
        .must_not_be_substring_of_by("Hello", StringComparison::Ordinal, "s")
        .is_ok());
}

#[test]
fn unnamed_string_uses_generic_noun() {
    let error = expect_kind("".must_not_be_null_or_empty(Param::unnamed()), ViolationKind::EmptyString);
    assert_eq!(
        error.message(),
        "The string must not be an empty string, but it actually is."
    );
}

#[test]
fn comparison_mode_parses_from_text() {
    assert_eq!(
        "ordinal_ignore_case".parse::<StringComparison>(),
        Ok(StringComparison::OrdinalIgnoreCase)
    );
    assert_eq!(
        "OrdinalIgnoreWhiteSpace".parse::<StringComparison>(),
        Ok(StringComparison::OrdinalIgnoreWhiteSpace)
    );
    let error = expect_violation(
        "loose".parse::<StringComparison>(),
        ViolationKind::EnumValueUndefined,
        "comparison",
    );
    assert_eq!(
        error.violation(),
        &Violation::EnumValueUndefined {
            enum_name: "StringComparison".into(),
            value: "\"loose\"".into()
        }
    );
    assert_eq!(
        error.message(),
        "comparison \"loose\" must be one of the defined constants of enum \"StringComparison\", but it actually is not."
    );
}
