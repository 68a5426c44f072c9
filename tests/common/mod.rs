//! Shared test utilities and fixtures.

#![allow(dead_code)]

use guardclause::{GuardError, ViolationKind};

// Re-export canonical test utilities from guardclause::testing
#[allow(unused_imports)]
pub use guardclause::testing::{Counter, CustomError, Tracked, NON_BLANK_PATTERN};

/// Unwrap the error of a failed check and assert its kind.
#[track_caller]
pub fn expect_kind<T: std::fmt::Debug>(result: Result<T, GuardError>, kind: ViolationKind) -> GuardError {
    match result {
        Ok(value) => panic!("expected {kind} violation, got Ok({value:?})"),
        Err(error) => {
            assert_eq!(error.kind(), kind, "unexpected violation: {}", error);
            error
        }
    }
}

/// Like [`expect_kind`], and also checks the recorded parameter name.
#[track_caller]
pub fn expect_violation<T: std::fmt::Debug>(
    result: Result<T, GuardError>,
    kind: ViolationKind,
    parameter: &str,
) -> GuardError {
    let error = expect_kind(result, kind);
    assert_eq!(error.parameter_name(), Some(parameter));
    error
}
