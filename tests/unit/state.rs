//! Object-state checks.

use crate::common::expect_kind;
use guardclause::prelude::*;

struct Connection {
    open: bool,
    pending: usize,
}

impl Connection {
    fn send(&mut self) -> Result<(), GuardError> {
        invalid_operation(!self.open, Param::message("the connection is closed"))?;
        self.pending += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), GuardError> {
        invalid_state(self.pending > 0, Param::unnamed())?;
        self.open = false;
        Ok(())
    }
}

#[test]
fn operation_on_closed_connection() {
    let mut connection = Connection {
        open: false,
        pending: 0,
    };
    let error = expect_kind(connection.send(), ViolationKind::InvalidOperation);
    assert_eq!(error.message(), "the connection is closed");
    assert_eq!(error.parameter_name(), None);
    assert_eq!(connection.pending, 0);
}

#[test]
fn state_check_blocks_close() {
    let mut connection = Connection {
        open: true,
        pending: 0,
    };
    connection.send().unwrap();
    let error = expect_kind(connection.close(), ViolationKind::InvalidState);
    assert_eq!(error.message(), "The object is in an invalid state.");
    assert!(connection.open);
}

#[test]
fn default_operation_message() {
    let error = expect_kind(invalid_operation(true, "ignored"), ViolationKind::InvalidOperation);
    assert_eq!(
        error.message(),
        "The operation is not valid in the current state of the object."
    );
    assert_eq!(error.parameter_name(), None);
}

#[test]
fn categories() {
    assert_eq!(ViolationKind::InvalidOperation.as_str(), "invalid_operation");
    assert_ne!(
        ViolationKind::InvalidOperation.category(),
        ViolationKind::Null.category()
    );
}
