// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Gated collection checks.
//!
//! The macros in this module invoke a collection check when the
//! `compile-assertions` feature is enabled (the default), and compile to
//! `Ok(value)` when it is not. Disabled, nothing but the value expression is
//! evaluated: not the predicate, not the constraint arguments, not the
//! strategy.
//!
//! ```
//! use guardclause::{must_be_one_of, must_have_unique_items, GuardError};
//!
//! fn schedule(day: u8, slots: &[u32]) -> Result<(), GuardError> {
//!     let day = must_be_one_of!(day, &[1, 2, 3, 4, 5], "day")?;
//!     let slots = must_have_unique_items!(slots, "slots")?;
//!     # let _ = (day, slots);
//!     Ok(())
//! }
//! # schedule(2, &[9, 10]).unwrap();
//! ```
//!
//! The feature is resolved inside this crate, so every call site in the
//! dependency graph sees the same setting. Both expansions type-check the
//! full check call, so a gated call site that compiles with the feature also
//! compiles without it.

/// Runs the check.
#[doc(hidden)]
#[macro_export]
macro_rules! __guard_enabled {
    ($check:path, $value:expr $(, $arg:expr)* $(,)?) => {
        $check($value $(, $arg)*)
    };
}

/// Type-checks the call but never runs it.
#[doc(hidden)]
#[macro_export]
macro_rules! __guard_elided {
    ($check:path, $value:expr $(, $arg:expr)* $(,)?) => {{
        let value = $value;
        if false {
            $check(value $(, $arg)*)
        } else {
            ::core::result::Result::Ok(value)
        }
    }};
}

#[cfg(feature = "compile-assertions")]
#[doc(hidden)]
#[macro_export]
macro_rules! __guard_gate {
    ($($tt:tt)*) => {
        $crate::__guard_enabled!($($tt)*)
    };
}

#[cfg(not(feature = "compile-assertions"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __guard_gate {
    ($($tt:tt)*) => {
        $crate::__guard_elided!($($tt)*)
    };
}

/// Gated [`ValueGuards::must_be_one_of`](crate::ValueGuards::must_be_one_of).
///
/// `must_be_one_of!(value, items, strategy)`
#[macro_export]
macro_rules! must_be_one_of {
    ($value:expr, $items:expr, $strategy:expr $(,)?) => {
        $crate::__guard_gate!($crate::ValueGuards::must_be_one_of, $value, $items, $strategy)
    };
}

/// Gated [`ValueGuards::must_not_be_one_of`](crate::ValueGuards::must_not_be_one_of).
///
/// `must_not_be_one_of!(value, items, strategy)`
#[macro_export]
macro_rules! must_not_be_one_of {
    ($value:expr, $items:expr, $strategy:expr $(,)?) => {
        $crate::__guard_gate!($crate::ValueGuards::must_not_be_one_of, $value, $items, $strategy)
    };
}

/// Gated [`CollectionGuards::must_not_be_null_or_empty`](crate::CollectionGuards::must_not_be_null_or_empty).
///
/// `must_not_be_null_or_empty!(collection, strategy)`
#[macro_export]
macro_rules! must_not_be_null_or_empty {
    ($value:expr, $strategy:expr $(,)?) => {
        $crate::__guard_gate!($crate::CollectionGuards::must_not_be_null_or_empty, $value, $strategy)
    };
}

/// Gated [`CollectionGuards::must_have_unique_items`](crate::CollectionGuards::must_have_unique_items).
///
/// `must_have_unique_items!(collection, strategy)`
#[macro_export]
macro_rules! must_have_unique_items {
    ($value:expr, $strategy:expr $(,)?) => {
        $crate::__guard_gate!($crate::CollectionGuards::must_have_unique_items, $value, $strategy)
    };
}

/// Gated [`CollectionGuards::must_not_contain_null`](crate::CollectionGuards::must_not_contain_null).
///
/// `must_not_contain_null!(collection, strategy)`
#[macro_export]
macro_rules! must_not_contain_null {
    ($value:expr, $strategy:expr $(,)?) => {
        $crate::__guard_gate!($crate::CollectionGuards::must_not_contain_null, $value, $strategy)
    };
}

/// Gated [`CollectionGuards::must_contain`](crate::CollectionGuards::must_contain).
///
/// `must_contain!(collection, &item, strategy)`
#[macro_export]
macro_rules! must_contain {
    ($value:expr, $item:expr, $strategy:expr $(,)?) => {
        $crate::__guard_gate!($crate::CollectionGuards::must_contain, $value, $item, $strategy)
    };
}

/// Gated [`CollectionGuards::must_not_contain`](crate::CollectionGuards::must_not_contain).
///
/// `must_not_contain!(collection, &item, strategy)`
#[macro_export]
macro_rules! must_not_contain {
    ($value:expr, $item:expr, $strategy:expr $(,)?) => {
        $crate::__guard_gate!($crate::CollectionGuards::must_not_contain, $value, $item, $strategy)
    };
}
