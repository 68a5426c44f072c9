// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Derive macros for `guardclause`.
//!
//! There is one: `#[derive(EnumType)]`, which lists a fieldless enum's
//! variants, names and discriminants so raw values can be checked against
//! the variants that actually exist.
//!
//! ```ignore
//! use guardclause::EnumType;
//!
//! #[derive(Clone, Copy, EnumType)]
//! #[enum_type(name = "Mode")]
//! enum AccessMode {
//!     Read = 1,
//!     Write = 2,
//! }
//!
//! assert!(AccessMode::is_valid_enum_value(2));
//! assert_eq!(AccessMode::NAME, "Mode");
//! ```
//!
//! The generated impl names the trait as `::guardclause::EnumType`, so the
//! deriving crate must depend on `guardclause` under that name.

use proc_macro::TokenStream;

mod enum_type;

/// Derive `guardclause::EnumType` for an enum whose variants carry no fields.
///
/// # Attributes
///
/// - `#[enum_type(name = "Name")]` - Override the reported enum name
///
/// Structs, unions, empty enums and variants with fields are rejected at
/// compile time.
#[proc_macro_derive(EnumType, attributes(enum_type))]
pub fn derive_enum_type(input: TokenStream) -> TokenStream {
    enum_type::derive(input)
}
