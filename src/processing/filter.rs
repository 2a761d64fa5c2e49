//! Filtering and search over collections.

use std::hash::Hash;

use ahash::RandomState;

use crate::types::{Collection, List};

// Fixed seeds so probe hashes are stable across calls.
fn probe_hasher() -> RandomState {
    RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
}

/// Returns a new `Vec` containing, in original order, only elements for which `predicate`
/// returns `true`.
pub fn filter<C, F>(list: &C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> bool,
{
    list.items().filter(|item| predicate(item)).cloned().collect()
}

/// Returns the first element (in iteration order) for which `predicate` returns `true`.
pub fn find<'a, C, F>(list: &'a C, mut predicate: F) -> Option<&'a C::Item>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    list.items().find(|item| predicate(item))
}

/// Alias of [`find`]; reads better when several elements may match.
pub fn first<'a, C, F>(list: &'a C, predicate: F) -> Option<&'a C::Item>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    find(list, predicate)
}

/// Returns the element at position 0, or `None` for absent/empty input.
pub fn first_element<L>(list: &L) -> Option<&L::Item>
where
    L: List + ?Sized,
{
    list.elements().first()
}

/// Returns the first element whose hash equals the hash of `probe`.
///
/// This compares **hash values, not equality**. Two unequal values that collide will match,
/// so the returned element is only a candidate. Callers that need exact matches should use
/// [`find`] with an equality predicate instead.
///
/// ```rust
/// use rust_list_processing::processing::find_by_hash;
///
/// let names = vec!["ada".to_string(), "grace".to_string()];
/// assert_eq!(find_by_hash(&names, "grace"), Some(&"grace".to_string()));
/// assert_eq!(find_by_hash(&names, "linus"), None);
/// ```
pub fn find_by_hash<'a, C, P>(list: &'a C, probe: &P) -> Option<&'a C::Item>
where
    C: Collection + ?Sized,
    C::Item: Hash,
    P: Hash + ?Sized,
{
    let hasher = probe_hasher();
    let wanted = hasher.hash_one(probe);
    let (idx, found) = list
        .items()
        .enumerate()
        .find(|(_, item)| hasher.hash_one(item) == wanted)?;
    log::debug!("find_by_hash: hash {wanted:#018x} matched element at position {idx}");
    Some(found)
}

/// Applies `mapper` to each element in order and returns the first `Some` result.
///
/// Elements after the first hit are not visited.
pub fn find_map<'a, C, B, F>(list: &'a C, mapper: F) -> Option<B>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item) -> Option<B>,
{
    list.items().find_map(mapper)
}

/// Returns the position of the first element satisfying `predicate`.
///
/// `None` means no element matched (or the list is absent/empty).
pub fn index_of<L, F>(list: &L, predicate: F) -> Option<usize>
where
    L: List + ?Sized,
    F: FnMut(&L::Item) -> bool,
{
    list.elements().iter().position(predicate)
}

/// `true` if at least one element satisfies `predicate`. Absent/empty input is `false`.
pub fn any<C, F>(list: &C, predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    list.items().any(predicate)
}

/// `true` only if the input is non-empty **and** every element satisfies `predicate`.
///
/// Unlike [`Iterator::all`], absent or empty input returns `false`.
pub fn all<C, F>(list: &C, predicate: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    if list.is_empty_or_absent() {
        return false;
    }
    list.items().all(predicate)
}

/// Fallible [`filter`]. The first `Err` from `predicate` aborts and is returned.
pub fn try_filter<C, E, F>(list: &C, mut predicate: F) -> Result<Vec<C::Item>, E>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> Result<bool, E>,
{
    let mut out = Vec::new();
    for item in list.items() {
        if predicate(item)? {
            out.push(item.clone());
        }
    }
    Ok(out)
}

/// Fallible [`find`].
pub fn try_find<'a, C, E, F>(list: &'a C, mut predicate: F) -> Result<Option<&'a C::Item>, E>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> Result<bool, E>,
{
    for item in list.items() {
        if predicate(item)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}
