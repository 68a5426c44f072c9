// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for string checks under every comparison mode.
//!
//! Arbitrary text, including invalid UTF-8 turned lossy and Unicode whose
//! lowercase form changes length, must never panic a check, and each check
//! must agree with its negation.

#![no_main]

use arbitrary::Arbitrary;
use guardclause::{EnumType, StrGuards, StringComparison, ViolationKind};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct StringInput {
    text: Vec<u8>,
    other: Vec<u8>,
    /// Raw comparison mode, frequently out of range.
    mode: i64,
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).chars().take(64).collect()
}

fuzz_target!(|input: StringInput| {
    let text = lossy(&input.text);
    let other = lossy(&input.other);

    let comparison = match StringComparison::must_be_valid_enum_value(input.mode, "mode") {
        Ok(comparison) => comparison,
        Err(error) => {
            assert_eq!(error.kind(), ViolationKind::EnumValueUndefined);
            assert!(!StringComparison::is_valid_enum_value(input.mode));
            return;
        }
    };

    let equal = text.as_str().must_be(&other, comparison, "text").is_ok();
    let not_equal = text.as_str().must_not_be(&other, comparison, "text").is_ok();
    assert_ne!(equal, not_equal, "equality and its negation agree for {text:?} / {other:?}");

    let contains = text.as_str().must_contain_by(&other, comparison, "text").is_ok();
    let absent = text.as_str().must_not_contain_by(&other, comparison, "text").is_ok();
    assert_ne!(contains, absent);
    assert_eq!(contains, other.as_str().is_substring_of(&text, comparison));

    if equal {
        assert!(contains, "equal strings must contain each other");
    }

    let blank = text.as_str().must_not_be_null_or_white_space("text");
    assert_eq!(blank.is_err(), text.as_str().is_null_or_white_space());
});
