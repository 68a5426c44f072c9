//! Presence checks: null, default value, missing value, nil UUID.

use crate::common::{expect_kind, expect_violation};
use guardclause::prelude::*;
use uuid::Uuid;

#[test]
fn must_not_be_null_returns_the_value() {
    assert_eq!(Some("a").must_not_be_null("x"), Ok("a"));
}

#[test]
fn must_not_be_null_names_the_parameter() {
    let error = expect_violation(None::<&str>.must_not_be_null("x"), ViolationKind::Null, "x");
    assert_eq!(error.message(), "x must not be null.");
}

#[test]
fn unnamed_null_uses_generic_noun() {
    let error = expect_kind(None::<u8>.must_not_be_null(Param::unnamed()), ViolationKind::Null);
    assert_eq!(error.message(), "The value must not be null.");
    assert_eq!(error.parameter_name(), None);
}

#[test]
fn custom_message_is_used_verbatim() {
    let error = expect_kind(
        None::<u8>.must_not_be_null(Param::named("x").with_message("x is required")),
        ViolationKind::Null,
    );
    assert_eq!(error.message(), "x is required");
    assert_eq!(error.to_string(), "x is required");
}

#[test]
fn must_have_value() {
    assert_eq!(Some(7_u8).must_have_value("n"), Ok(7));
    let error = expect_violation(
        None::<u8>.must_have_value("n"),
        ViolationKind::NullableNoValue,
        "n",
    );
    assert_eq!(
        error.message(),
        "n must have a value, but it actually is null."
    );
}

#[test]
fn must_not_be_default() {
    assert_eq!(3_u32.must_not_be_default("n"), Ok(3));
    expect_violation(0_u32.must_not_be_default("n"), ViolationKind::DefaultValue, "n");
    expect_kind(
        (0.0_f64, false).must_not_be_default("pair"),
        ViolationKind::DefaultValue,
    );
    assert!(Uuid::nil().must_not_be_default("id").is_err());
}

#[test]
fn must_not_be_empty_uuid() {
    let id = Uuid::from_u128(42);
    assert_eq!(id.must_not_be_empty("id"), Ok(id));
    let error = expect_violation(Uuid::nil().must_not_be_empty("id"), ViolationKind::EmptyUuid, "id");
    assert_eq!(
        error.message(),
        "id must be a valid UUID, but it actually is an empty one."
    );
}
