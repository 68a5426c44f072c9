// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Guard clauses: precondition checks that fail fast with precise errors.
//!
//! A guard validates an argument (or the receiver's state) at the top of a
//! function and either hands the value back or returns an error naming the
//! violated precondition, the parameter and the offending value.
//!
//! ```
//! use guardclause::prelude::*;
//!
//! fn set_volume(level: i32, label: Option<&str>) -> Result<(), GuardError> {
//!     let level = level.must_be_in(Range::from_inclusive(0).to_inclusive(11)?, "level")?;
//!     let label = label.must_not_be_null("label")?.must_not_be_null_or_empty("label")?;
//!     # let _ = (level, label);
//!     Ok(())
//! }
//!
//! let error = set_volume(12, Some("amp")).unwrap_err();
//! assert_eq!(error.kind(), ViolationKind::OutOfRange);
//! assert_eq!(
//!     error.message(),
//!     "level must be between 0 (inclusive) and 11 (inclusive), but it actually is 12."
//! );
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  error.rs   │◀────│  throw.rs   │◀────│  check/*.rs  │
//! │ (GuardError,│     │ (one failure│     │ (extension   │
//! │  Violation) │     │  producer   │     │  traits)     │
//! └─────────────┘     │  per kind)  │     └──────┬───────┘
//!        ▲            └──────▲──────┘            │
//!        │                   │                   ▼
//! ┌──────┴──────┐     ┌──────┴──────┐     ┌──────────────┐
//! │ strategy.rs │     │  range.rs   │     │   gate.rs    │
//! │ (Param, the │     │  text.rs    │     │ (feature-    │
//! │  callbacks) │     │  enums.rs   │     │  gated       │
//! └─────────────┘     └─────────────┘     │  macros)     │
//!                                         └──────────────┘
//! ```
//!
//! # Customizing the failure
//!
//! The last argument of every check is a [`Strategy`]. Pass a parameter name
//! (`"port"`) or a [`Param`] to get the default [`GuardError`]; pass a closure
//! to build your own error from the check's context:
//!
//! ```
//! use guardclause::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! enum ConfigError {
//!     PortTooLow(u16),
//! }
//!
//! let result = 80_u16.must_be_greater_than(1024, |port: u16, _floor: u16| ConfigError::PortTooLow(port));
//! assert_eq!(result, Err(ConfigError::PortTooLow(80)));
//! ```
//!
//! # Features
//!
//! - `compile-assertions` (default): keeps the gated collection checks
//!   ([`must_be_one_of!`], [`must_have_unique_items!`], ...) in the build.
//!   Without it they return `Ok(value)` without evaluating anything.

extern crate self as guardclause;

pub mod check;
pub mod enums;
pub mod error;
mod gate;
pub mod prelude;
pub mod range;
pub mod strategy;
pub mod testing;
pub mod text;
pub mod throw;

pub use check::{
    invalid_operation, invalid_state, AnyGuards, CollectionGuards, MaybeSlice, OptionGuards,
    ReferenceGuards, StrGuards, TypeGuards, UriStrGuards, UrlGuards, UuidGuards, ValueGuards,
};
pub use enums::{EnumType, TypeInfo};
pub use error::{Category, GuardError, Violation, ViolationKind};
pub use guardclause_macros::EnumType;
pub use range::{Range, RangeFromInfo};
pub use strategy::{Param, Strategy};
pub use text::{MaybeStr, StringComparison};
