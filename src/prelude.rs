// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything a guarding function usually needs, in one import.
//!
//! ```
//! use guardclause::prelude::*;
//! ```

pub use crate::check::{
    invalid_operation, invalid_state, AnyGuards, CollectionGuards, OptionGuards, ReferenceGuards,
    StrGuards, TypeGuards, UriStrGuards, UrlGuards, UuidGuards, ValueGuards,
};
pub use crate::enums::TypeInfo;
pub use crate::error::{GuardError, ViolationKind};
pub use crate::range::Range;
pub use crate::strategy::Param;
pub use crate::text::StringComparison;
pub use crate::EnumType;
pub use crate::{
    must_be_one_of, must_contain, must_have_unique_items, must_not_be_null_or_empty,
    must_not_be_one_of, must_not_contain, must_not_contain_null,
};
