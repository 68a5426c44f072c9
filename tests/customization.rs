//! Custom failure callbacks.
//!
//! A callback replaces the default error entirely: the check returns whatever
//! the callback builds and never a `GuardError`.

mod common;

use common::CustomError;
use guardclause::prelude::*;
use guardclause::Violation;
use regex::Regex;
use url::Url;
use uuid::Uuid;

#[test]
fn zero_argument_callbacks() {
    let result: Result<u8, CustomError> =
        None::<u8>.must_not_be_null(|| CustomError::custom("no value"));
    assert_eq!(result, Err(CustomError::custom("no value")));

    let result: Result<(), CustomError> =
        invalid_state(true, || CustomError::custom("broken"));
    assert_eq!(result, Err(CustomError::custom("broken")));
}

#[test]
fn one_argument_callbacks_receive_the_value() {
    let result = 0_u64.must_not_be_default(|value: u64| CustomError::custom(format!("got {value}")));
    assert_eq!(result, Err(CustomError::custom("got 0")));

    let result = Uuid::nil().must_not_be_empty(|id: Uuid| CustomError::custom(id.to_string()));
    assert_eq!(
        result,
        Err(CustomError::custom("00000000-0000-0000-0000-000000000000"))
    );

    let result = "  ".must_not_be_null_or_white_space(|text: &str| CustomError::custom(text.len().to_string()));
    assert_eq!(result, Err(CustomError::custom("2")));

    let result = vec![1_u8, 1].must_have_unique_items(|items: Vec<u8>| {
        CustomError::custom(format!("{} items", items.len()))
    });
    assert_eq!(result, Err(CustomError::custom("2 items")));
}

#[test]
fn two_argument_callbacks_receive_value_and_constraint() {
    let result = 11_i32.must_be_less_than(10, |value: i32, boundary: i32| {
        CustomError::custom(format!("{value} >= {boundary}"))
    });
    assert_eq!(result, Err(CustomError::custom("11 >= 10")));

    let range = Range::from_inclusive(1).to_inclusive(3).unwrap();
    let result = 5_i32.must_be_in(range, |value: i32, range: Range<i32>| {
        CustomError::custom(format!("{value} outside {range}"))
    });
    assert_eq!(result, Err(CustomError::custom("5 outside 1 (inclusive) and 3 (inclusive)")));

    let result = 5_i32.must_be_one_of(&[1, 2, 3], |value: i32, items: &[i32]| {
        CustomError::custom(format!("{value} not in {items:?}"))
    });
    assert_eq!(result, Err(CustomError::custom("5 not in [1, 2, 3]")));

    let digits = Regex::new(r"^\d+$").unwrap();
    let result = "abc".must_match(&digits, |value: &str, regex: &Regex| {
        CustomError::custom(format!("{value} !~ {}", regex.as_str()))
    });
    assert_eq!(result, Err(CustomError::custom(r"abc !~ ^\d+$")));

    let url = Url::parse("ftp://example.com").unwrap();
    let result = (&url).must_have_scheme("https", |url: &Url, scheme: &str| {
        CustomError::custom(format!("{} != {scheme}", url.scheme()))
    });
    assert_eq!(result, Err(CustomError::custom("ftp != https")));
}

#[test]
fn three_argument_callbacks_receive_the_comparison_mode() {
    let result = "Hello".must_be(
        "hello",
        StringComparison::Ordinal,
        |value: &str, other: &str, comparison: StringComparison| {
            CustomError::custom(format!("{value} {other} {comparison}"))
        },
    );
    assert_eq!(result, Err(CustomError::custom("Hello hello Ordinal")));
}

#[test]
fn callbacks_run_only_on_failure() {
    let mut calls = 0;
    let result = 1_i32.must_be_less_than(10, |_: i32, _: i32| {
        calls += 1;
        CustomError::custom("unreachable")
    });
    assert_eq!(result, Ok(1));
    assert_eq!(calls, 0);
}

#[test]
fn callbacks_may_return_any_type() {
    let result: Result<i32, String> = 42_i32.must_be_equal_to(7, |value: i32, expected: i32| {
        format!("{value} vs {expected}")
    });
    assert_eq!(result, Err("42 vs 7".to_string()));
}

#[test]
fn missing_callback_is_reported_through_the_callback_error_type() {
    let callback: Option<fn(i32, i32) -> CustomError> = None;
    let error = 11_i32.must_be_less_than(10, callback).unwrap_err();
    match error {
        CustomError::Guard(guard) => {
            assert_eq!(guard.kind(), ViolationKind::CustomCallbackMissing);
            assert_eq!(guard.violation(), &Violation::CustomCallbackMissing);
            assert_eq!(guard.parameter_name(), Some("failure_callback"));
        }
        other => panic!("expected a wrapped guard error, got {other:?}"),
    }
}

#[test]
fn missing_callback_is_ignored_when_the_check_passes() {
    let callback: Option<fn(i32, i32) -> CustomError> = None;
    assert_eq!(1_i32.must_be_less_than(10, callback), Ok(1));
}

#[test]
fn present_optional_callback_is_used() {
    let callback = Some(|value: i32, _: i32| CustomError::custom(value.to_string()));
    assert_eq!(
        11_i32.must_be_less_than(10, callback),
        Err(CustomError::custom("11"))
    );
}

#[test]
fn custom_message_keeps_the_default_error() {
    let error = 11_i32
        .must_be_less_than(10, Param::named("limit").with_message("too many"))
        .unwrap_err();
    assert_eq!(error.kind(), ViolationKind::OutOfRange);
    assert_eq!(error.parameter_name(), Some("limit"));
    assert_eq!(error.message(), "too many");
}
