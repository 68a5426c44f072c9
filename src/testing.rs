// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::error::GuardError;

/// Counts how often tracked items are compared or hashed.
#[derive(Debug, Clone, Default)]
pub struct Counter(Rc<Cell<usize>>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so every `eq` and `hash` on it bumps this counter.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            counter: self.0.clone(),
        }
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// An item whose equality and hashing are observable.
#[derive(Clone)]
pub struct Tracked<T> {
    value: T,
    counter: Rc<Cell<usize>>,
}

impl<T> Tracked<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    fn touch(&self) {
        self.counter.set(self.counter.get() + 1);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.touch();
        self.value == other.value
    }
}

impl<T: Hash> Hash for Tracked<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.touch();
        self.value.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// A caller-defined error type, distinct from [`GuardError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomError {
    #[error("custom failure: {0}")]
    Custom(String),
    #[error(transparent)]
    Guard(#[from] GuardError),
}

impl CustomError {
    pub fn custom(message: impl Into<String>) -> Self {
        CustomError::Custom(message.into())
    }
}

/// Strings that pass `must_not_be_null_or_white_space`, for proptest.
pub const NON_BLANK_PATTERN: &str = "[ \t]{0,3}[a-zA-Z0-9_.-]{1,12}[ \t]{0,3}";
