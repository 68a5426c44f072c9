//! Type checks and derived enum descriptors.

use std::any::Any;

use crate::common::{expect_kind, expect_violation};
use guardclause::prelude::*;
use guardclause::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumType)]
enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Friday = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumType)]
#[enum_type(name = "Color")]
enum Colour {
    Red,
    Green,
}

#[test]
fn derived_descriptor() {
    assert_eq!(Weekday::NAME, "Weekday");
    assert_eq!(Weekday::VARIANT_NAMES, ["Monday", "Tuesday", "Friday"]);
    assert_eq!(Weekday::Friday.discriminant(), 5);
    assert_eq!(Weekday::Friday.variant_name(), "Friday");
    assert_eq!(Colour::NAME, "Color");
    assert_eq!(Colour::Green.discriminant(), 1);
}

#[test]
fn raw_values_convert_to_variants() {
    assert_eq!(Weekday::must_be_valid_enum_value(2, "day"), Ok(Weekday::Tuesday));
    assert!(Weekday::is_valid_enum_value(5));
    assert!(!Weekday::is_valid_enum_value(3));
    assert_eq!(Weekday::from_discriminant(1), Some(Weekday::Monday));
}

#[test]
fn undefined_raw_value() {
    let error = expect_violation(
        Weekday::must_be_valid_enum_value(3, "day"),
        ViolationKind::EnumValueUndefined,
        "day",
    );
    assert_eq!(
        error.violation(),
        &Violation::EnumValueUndefined {
            enum_name: "Weekday".into(),
            value: "3".into()
        }
    );
    assert_eq!(
        error.message(),
        "day \"3\" must be one of the defined constants of enum \"Weekday\", but it actually is not."
    );
}

#[test]
fn enum_type_check() {
    let info = TypeInfo::of_enum::<Weekday>();
    assert!(info.is_enum());
    assert_eq!(info.enum_variants(), Some(Weekday::VARIANT_NAMES));
    assert_eq!(info.must_be_enum_type("type"), Ok(info));

    let plain = TypeInfo::of::<String>();
    expect_violation(plain.must_be_enum_type("type"), ViolationKind::NotAnEnumType, "type");
}

#[test]
fn unnamed_enum_type_check() {
    let error = expect_kind(
        TypeInfo::of::<u8>().must_be_enum_type(Param::unnamed()),
        ViolationKind::NotAnEnumType,
    );
    assert_eq!(
        error.message(),
        "The type \"u8\" must be an enum type, but it actually is not."
    );
}

#[test]
fn downcasts() {
    let boxed: Box<dyn Any> = Box::new(Weekday::Monday);
    let value: &dyn Any = boxed.as_ref();
    assert_eq!(value.must_be_castable_to::<Weekday, _>("value"), Ok(&Weekday::Monday));
    let error = expect_violation(
        value.must_be_castable_to::<Colour, _>("value"),
        ViolationKind::InvalidTypeCast,
        "value",
    );
    assert!(error.message().ends_with("Colour\"."));
}
