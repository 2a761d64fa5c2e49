//! Element mapping: plain, indexed, filtering, flattening, side-effecting and fallible.

use std::fmt::Display;
use std::hash::Hash;

use ahash::AHashSet;

use crate::types::{Collection, List};

/// Returns a new `Vec` by applying `mapper` to every element, preserving order and length.
///
/// Absent or empty input yields an empty `Vec`.
pub fn map<'a, C, B, F>(list: &'a C, mapper: F) -> Vec<B>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item) -> B,
{
    list.items().map(mapper).collect()
}

/// Like [`map`], but `mapper` also receives the zero-based position of the element.
pub fn map_indexed<'a, L, B, F>(list: &'a L, mut mapper: F) -> Vec<B>
where
    L: List + ?Sized,
    F: FnMut(&'a L::Item, usize) -> B,
{
    list.elements()
        .iter()
        .enumerate()
        .map(|(idx, item)| mapper(item, idx))
        .collect()
}

/// Like [`map`], but elements for which `mapper` returns `None` are left out.
pub fn filter_map<'a, C, B, F>(list: &'a C, mapper: F) -> Vec<B>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item) -> Option<B>,
{
    list.items().filter_map(mapper).collect()
}

/// Applies `mapper` to every element and concatenates the returned sequences in input order.
pub fn flat_map<'a, C, B, I, F>(list: &'a C, mapper: F) -> Vec<B>
where
    C: Collection + ?Sized,
    I: IntoIterator<Item = B>,
    F: FnMut(&'a C::Item) -> I,
{
    list.items().flat_map(mapper).collect()
}

/// Like [`flat_map`], but all produced values are merged into one set.
///
/// The result has no defined order.
pub fn flat_map_unique<'a, C, B, I, F>(list: &'a C, mapper: F) -> AHashSet<B>
where
    C: Collection + ?Sized,
    B: Eq + Hash,
    I: IntoIterator<Item = B>,
    F: FnMut(&'a C::Item) -> I,
{
    list.items().flat_map(mapper).collect()
}

/// Calls `action` once per element, in iteration order.
pub fn each<C, F>(list: &C, action: F)
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item),
{
    list.items().for_each(action)
}

/// Returns the [`Display`] text of every element, in order.
pub fn to_string_list<C>(list: &C) -> Vec<String>
where
    C: Collection + ?Sized,
    C::Item: Display,
{
    list.items().map(ToString::to_string).collect()
}

/// Fallible [`map`].
///
/// Stops at the first `Err` returned by `mapper` and returns it; elements after the failing
/// one are never visited and no partial output escapes.
pub fn try_map<'a, C, B, E, F>(list: &'a C, mapper: F) -> Result<Vec<B>, E>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item) -> Result<B, E>,
{
    list.items().map(mapper).collect()
}

/// Fallible [`each`]. Stops at the first `Err`.
pub fn try_each<C, E, F>(list: &C, action: F) -> Result<(), E>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> Result<(), E>,
{
    list.items().try_for_each(action)
}
