//! Comparison checks: equality, ordering, ranges, one-of.

use crate::common::{expect_kind, expect_violation};
use guardclause::prelude::*;
use guardclause::Violation;

#[test]
fn less_than_family() {
    assert_eq!(1_i32.must_be_less_than(2, "x"), Ok(1));
    let error = expect_violation(2_i32.must_be_less_than(2, "x"), ViolationKind::OutOfRange, "x");
    assert_eq!(
        error.message(),
        "x must be less than 2, but it actually is 2."
    );
    assert_eq!(
        error.violation(),
        &Violation::OutOfRange {
            actual: "2".into(),
            boundary: "2".into()
        }
    );

    let error = expect_kind(
        3_i32.must_be_less_than_or_equal_to(2, "x"),
        ViolationKind::OutOfRange,
    );
    assert_eq!(
        error.message(),
        "x must be less than or equal to 2, but it actually is 3."
    );
}

#[test]
fn negated_messages_read_as_negations() {
    let error = expect_kind(1_i32.must_not_be_less_than(2, "x"), ViolationKind::OutOfRange);
    assert_eq!(
        error.message(),
        "x must not be less than 2, but it actually is 1."
    );
    let error = expect_kind(3_i32.must_not_be_greater_than(2, "x"), ViolationKind::OutOfRange);
    assert_eq!(
        error.message(),
        "x must not be greater than 2, but it actually is 3."
    );
}

#[test]
fn ordering_works_for_strings_and_floats() {
    assert!("apple".must_be_less_than("banana", "fruit").is_ok());
    assert!(2.5_f64.must_be_greater_than_or_equal_to(2.5, "f").is_ok());
    expect_kind(f32::NAN.must_be_greater_than(0.0, "f"), ViolationKind::OutOfRange);
}

#[test]
fn equality() {
    assert_eq!("a".to_string().must_be_equal_to("a".to_string(), "s"), Ok("a".to_string()));
    let error = expect_kind(1_u8.must_be_equal_to(2, "n"), ViolationKind::ValuesNotEqual);
    assert_eq!(
        error.message(),
        "n must be equal to 2, but it actually is 1."
    );
    let error = expect_kind(1_u8.must_not_be_equal_to(1, "n"), ViolationKind::ValuesEqual);
    assert_eq!(
        error.message(),
        "n must not be equal to 1, but it actually is 1."
    );
}

#[test]
fn inclusive_range_accepts_both_bounds() {
    let range = Range::from_inclusive(1).to_inclusive(10).unwrap();
    for value in [1_i32, 5, 10] {
        assert_eq!(value.must_be_in(range, "v"), Ok(value));
    }
    for value in [0_i32, 11] {
        expect_violation(value.must_be_in(range, "v"), ViolationKind::OutOfRange, "v");
    }
}

#[test]
fn exclusive_bounds_are_not_promoted() {
    let range = Range::from_exclusive(1).to_exclusive(10).unwrap();
    expect_kind(1_i32.must_be_in(range, "v"), ViolationKind::OutOfRange);
    expect_kind(10_i32.must_be_in(range, "v"), ViolationKind::OutOfRange);
    assert!(2_i32.must_be_in(range, "v").is_ok());
}

#[test]
fn range_message_describes_both_bounds() {
    let range = Range::from_exclusive(1).to_inclusive(10).unwrap();
    let error = expect_kind(0_i32.must_be_in(range, "v"), ViolationKind::OutOfRange);
    assert_eq!(
        error.message(),
        "v must be between 1 (exclusive) and 10 (inclusive), but it actually is 0."
    );

    let error = expect_kind(5_i32.must_not_be_in(range, "v"), ViolationKind::OutOfRange);
    assert_eq!(
        error.message(),
        "v must not be between 1 (exclusive) and 10 (inclusive), but it actually is 5."
    );
}

#[test]
fn inverted_range_fails_at_construction() {
    let error = expect_violation(
        Range::from_inclusive(10).to_inclusive(1),
        ViolationKind::OutOfRange,
        "to",
    );
    assert_eq!(
        error.message(),
        "to must not be less than 10, but it actually is 1."
    );
}

#[test]
fn one_of_lists_the_items() {
    assert_eq!(2_i32.must_be_one_of(&[1, 2, 3], "v"), Ok(2));
    let error = expect_violation(
        5_i32.must_be_one_of(&[1, 2, 3], "v"),
        ViolationKind::ValueNotOneOf,
        "v",
    );
    assert_eq!(
        error.violation(),
        &Violation::ValueNotOneOf {
            actual: "5".into(),
            items: vec!["1".into(), "2".into(), "3".into()]
        }
    );
    assert_eq!(
        error.message(),
        "v must be one of the following items\n1,\n2,\n3\nbut it actually is 5."
    );
}

#[test]
fn not_one_of() {
    assert_eq!("x".must_not_be_one_of(&["a", "b"], "s"), Ok("x"));
    let error = expect_kind("a".must_not_be_one_of(&["a", "b"], "s"), ViolationKind::ValueIsOneOf);
    assert_eq!(
        error.message(),
        "s must not be one of the following items\n\"a\",\n\"b\"\nbut it actually is \"a\"."
    );
}
