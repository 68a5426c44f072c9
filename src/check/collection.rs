// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collection checks.
//!
//! Every check accepts any [`MaybeSlice`]: slices, arrays, `Vec`, `Box<[T]>`,
//! references to those and their `Option` forms. An absent collection never
//! satisfies a check; the default strategy reports `Null`.
//!
//! Every `must_*` check except the count checks is also available as a gated
//! macro ([`must_not_be_null_or_empty!`](crate::must_not_be_null_or_empty),
//! [`must_not_contain_null!`](crate::must_not_contain_null),
//! [`must_have_unique_items!`](crate::must_have_unique_items),
//! [`must_contain!`](crate::must_contain), [`must_not_contain!`](crate::must_not_contain))
//! that compiles to nothing without the `compile-assertions` feature.

use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::error::GuardError;
use crate::strategy::{Param, Strategy};
use crate::throw;

/// A value that may hold a contiguous sequence of items.
pub trait MaybeSlice {
    type Item;

    fn as_opt_slice(&self) -> Option<&[Self::Item]>;
}

impl<T> MaybeSlice for [T] {
    type Item = T;

    #[inline]
    fn as_opt_slice(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T, const N: usize> MaybeSlice for [T; N] {
    type Item = T;

    #[inline]
    fn as_opt_slice(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> MaybeSlice for Vec<T> {
    type Item = T;

    #[inline]
    fn as_opt_slice(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T> MaybeSlice for Box<[T]> {
    type Item = T;

    #[inline]
    fn as_opt_slice(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<C: MaybeSlice> MaybeSlice for Option<C> {
    type Item = C::Item;

    #[inline]
    fn as_opt_slice(&self) -> Option<&[C::Item]> {
        self.as_ref().and_then(MaybeSlice::as_opt_slice)
    }
}

impl<C: MaybeSlice + ?Sized> MaybeSlice for &C {
    type Item = C::Item;

    #[inline]
    fn as_opt_slice(&self) -> Option<&[C::Item]> {
        (**self).as_opt_slice()
    }
}

/// Index of the first item equal to an earlier one.
///
/// Pairwise, O(n²) comparisons: guarded collections are argument lists, not
/// bulk data. Hashes are computed once up front so most pairs are rejected
/// without calling `PartialEq`.
fn first_duplicate<T: Hash + PartialEq>(items: &[T]) -> Option<usize> {
    let hasher = FxBuildHasher;
    let hashes: Vec<u64> = items.iter().map(|item| hasher.hash_one(item)).collect();
    (1..items.len()).find(|&later| {
        (0..later).any(|earlier| hashes[earlier] == hashes[later] && items[earlier] == items[later])
    })
}

/// Null first, then the check-specific producer.
#[inline]
fn present_or_null<C: MaybeSlice>(
    value: &C,
    param: Param<'_>,
    produce: impl FnOnce(&[C::Item], Param<'_>) -> GuardError,
) -> GuardError {
    match value.as_opt_slice() {
        Some(items) => produce(items, param),
        None => throw::argument_null(param),
    }
}

pub trait CollectionGuards: MaybeSlice + Sized {
    /// `true` for an absent or empty collection.
    fn is_null_or_empty(&self) -> bool {
        self.as_opt_slice().map_or(true, <[Self::Item]>::is_empty)
    }

    /// Fails with `Null` or `EmptyCollection`.
    fn must_not_be_null_or_empty<S>(self, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(Self,)>,
    {
        if !CollectionGuards::is_null_or_empty(&self) {
            return Ok(self);
        }
        Err(strategy.fail((self,), |(value,), param| {
            present_or_null(&value, param, |_, param| throw::empty_collection(param))
        }))
    }

    /// Fails with `Null`, `EmptyCollection` or `DuplicateItem` at the first
    /// repeated item. An empty collection has nothing to be unique about.
    fn must_have_unique_items<S>(self, strategy: S) -> Result<Self, S::Error>
    where
        Self::Item: Hash + PartialEq + Debug,
        S: Strategy<(Self,)>,
    {
        let unique = self
            .as_opt_slice()
            .is_some_and(|items| !items.is_empty() && first_duplicate(items).is_none());
        if unique {
            return Ok(self);
        }
        Err(strategy.fail((self,), |(value,), param| {
            present_or_null(&value, param, |items, param| {
                match first_duplicate(items) {
                    Some(index) => throw::duplicate_item(items, index, param),
                    None => throw::empty_collection(param),
                }
            })
        }))
    }

    /// Fails with `NullItemInCollection` at the first `None` item.
    fn must_not_contain_null<T, S>(self, strategy: S) -> Result<Self, S::Error>
    where
        Self: MaybeSlice<Item = Option<T>>,
        T: Debug,
        S: Strategy<(Self,)>,
    {
        let no_null = self
            .as_opt_slice()
            .is_some_and(|items| items.iter().all(Option::is_some));
        if no_null {
            return Ok(self);
        }
        Err(strategy.fail((self,), |(value,), param| {
            present_or_null(&value, param, |items, param| {
                let index = items.iter().position(Option::is_none).unwrap_or_default();
                throw::null_item(items, index, param)
            })
        }))
    }

    /// Fails with `ItemMissing` unless an item equals `item`.
    fn must_contain<'i, S>(self, item: &'i Self::Item, strategy: S) -> Result<Self, S::Error>
    where
        Self::Item: PartialEq + Debug,
        S: Strategy<(Self, &'i Self::Item)>,
    {
        if self.as_opt_slice().is_some_and(|items| items.contains(item)) {
            return Ok(self);
        }
        Err(strategy.fail((self, item), |(value, item), param| {
            present_or_null(&value, param, |items, param| {
                throw::missing_item(items, item, param)
            })
        }))
    }

    /// Fails with `ItemPresent` when an item equals `item`.
    fn must_not_contain<'i, S>(self, item: &'i Self::Item, strategy: S) -> Result<Self, S::Error>
    where
        Self::Item: PartialEq + Debug,
        S: Strategy<(Self, &'i Self::Item)>,
    {
        if self.as_opt_slice().is_some_and(|items| !items.contains(item)) {
            return Ok(self);
        }
        Err(strategy.fail((self, item), |(value, item), param| {
            present_or_null(&value, param, |items, param| {
                throw::existing_item(items, item, param)
            })
        }))
    }

    /// Fails with `InvalidCollectionCount` unless exactly `count` items.
    fn must_have_count<S>(self, count: usize, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, usize)>,
    {
        if self.as_opt_slice().is_some_and(|items| items.len() == count) {
            return Ok(self);
        }
        Err(strategy.fail((self, count), |(value, count), param| {
            present_or_null(&value, param, |items, param| {
                throw::invalid_collection_count(items.len(), count, param)
            })
        }))
    }

    /// Fails with `InvalidCollectionCount` when fewer than `minimum` items.
    fn must_have_min_count<S>(self, minimum: usize, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, usize)>,
    {
        if self.as_opt_slice().is_some_and(|items| items.len() >= minimum) {
            return Ok(self);
        }
        Err(strategy.fail((self, minimum), |(value, minimum), param| {
            present_or_null(&value, param, |items, param| {
                throw::invalid_minimum_collection_count(items.len(), minimum, param)
            })
        }))
    }

    /// Fails with `InvalidCollectionCount` when more than `maximum` items.
    fn must_have_max_count<S>(self, maximum: usize, strategy: S) -> Result<Self, S::Error>
    where
        S: Strategy<(Self, usize)>,
    {
        if self.as_opt_slice().is_some_and(|items| items.len() <= maximum) {
            return Ok(self);
        }
        Err(strategy.fail((self, maximum), |(value, maximum), param| {
            present_or_null(&value, param, |items, param| {
                throw::invalid_maximum_collection_count(items.len(), maximum, param)
            })
        }))
    }
}

impl<C: MaybeSlice> CollectionGuards for C {}
