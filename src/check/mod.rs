// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The check catalog.
//!
//! Checks are extension traits, so a guard reads as a method call on the
//! value it guards. Every check moves the value in and hands it back on
//! success, which makes `?` chains natural:
//!
//! ```
//! use guardclause::prelude::*;
//!
//! fn connect(host: Option<&str>, port: u16) -> Result<(), GuardError> {
//!     let host = host.must_not_be_null("host")?.must_not_be_null_or_white_space("host")?;
//!     let port = port.must_be_in(Range::from_inclusive(1).to_inclusive(65535)?, "port")?;
//!     # let _ = (host, port);
//!     Ok(())
//! }
//! # connect(Some("localhost"), 8080).unwrap();
//! ```
//!
//! | Module         | Trait                              | Receiver                     |
//! |----------------|------------------------------------|------------------------------|
//! | [`presence`]   | `OptionGuards`, `UuidGuards`       | `Option<T>`, `Uuid`          |
//! | [`value`]      | `ValueGuards`                      | any `T`                      |
//! | [`identity`]   | `ReferenceGuards`                  | `&T`                         |
//! | [`string`]     | `StrGuards`                        | any [`MaybeStr`]             |
//! | [`collection`] | `CollectionGuards`                 | any [`MaybeSlice`]           |
//! | [`types`]      | `TypeGuards`, `AnyGuards`          | `TypeInfo`, `&dyn Any`       |
//! | [`uri`]        | `UriStrGuards`, `UrlGuards`        | `&str`, `&Url`               |
//! | [`state`]      | free functions                     | a condition                  |
//!
//! Ordering checks compare through `PartialOrd`. Values that do not compare
//! (NaN against anything) fail every ordering check, positive or negated.
//!
//! [`MaybeStr`]: crate::text::MaybeStr

pub mod collection;
pub mod identity;
pub mod presence;
pub mod state;
pub mod string;
pub mod types;
pub mod uri;
pub mod value;

pub use collection::{CollectionGuards, MaybeSlice};
pub use identity::ReferenceGuards;
pub use presence::{OptionGuards, UuidGuards};
pub use state::{invalid_operation, invalid_state};
pub use string::StrGuards;
pub use types::{AnyGuards, TypeGuards};
pub use uri::{UriStrGuards, UrlGuards};
pub use value::ValueGuards;
