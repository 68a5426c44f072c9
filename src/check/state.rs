// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Object-state checks.
//!
//! These guard the receiver rather than an argument, so there is no value to
//! hand back and no parameter name: the default error carries only a message,
//! taken from [`Param::message`](crate::Param::message) when one is given.
//!
//! ```
//! use guardclause::{invalid_operation, Param};
//!
//! fn send(closed: bool) -> Result<(), guardclause::GuardError> {
//!     invalid_operation(closed, Param::message("the channel is closed"))?;
//!     Ok(())
//! }
//!
//! assert!(send(false).is_ok());
//! assert_eq!(send(true).unwrap_err().message(), "the channel is closed");
//! ```

use crate::strategy::Strategy;
use crate::throw;

/// Fails with `InvalidOperation` when `condition` is true.
#[inline]
pub fn invalid_operation<S: Strategy<()>>(condition: bool, strategy: S) -> Result<(), S::Error> {
    if condition {
        Err(strategy.fail((), |(), param| throw::invalid_operation(param)))
    } else {
        Ok(())
    }
}

/// Fails with `InvalidState` when `condition` is true.
#[inline]
pub fn invalid_state<S: Strategy<()>>(condition: bool, strategy: S) -> Result<(), S::Error> {
    if condition {
        Err(strategy.fail((), |(), param| throw::invalid_state(param)))
    } else {
        Ok(())
    }
}
