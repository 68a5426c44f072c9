// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for range construction and membership.
//!
//! Bounds come straight from the fuzzer, so inverted and degenerate ranges
//! are common. Construction must reject exactly the inverted ones and
//! membership must match the bound flags.

#![no_main]

use arbitrary::Arbitrary;
use guardclause::{Range, ValueGuards, ViolationKind};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RangeInput {
    from: i32,
    to: i32,
    from_inclusive: bool,
    to_inclusive: bool,
    value: i32,
}

fuzz_target!(|input: RangeInput| {
    let range = match Range::new(input.from, input.from_inclusive, input.to, input.to_inclusive) {
        Ok(range) => range,
        Err(error) => {
            assert!(input.to < input.from);
            assert_eq!(error.kind(), ViolationKind::OutOfRange);
            assert_eq!(error.parameter_name(), Some("to"));
            return;
        }
    };
    assert!(input.from <= input.to);

    let above = if input.from_inclusive {
        input.value >= input.from
    } else {
        input.value > input.from
    };
    let below = if input.to_inclusive {
        input.value <= input.to
    } else {
        input.value < input.to
    };
    assert_eq!(range.contains(&input.value), above && below);

    let inside = input.value.must_be_in(range, "value").is_ok();
    let outside = input.value.must_not_be_in(range, "value").is_ok();
    assert_eq!(inside, above && below);
    assert_ne!(inside, outside);
});
