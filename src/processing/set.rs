//! Deduplication and set operations.

use std::hash::Hash;

use ahash::AHashSet;

use crate::types::{Collection, List};

/// Returns the first occurrence of each distinct value, in original relative order.
///
/// Membership is tracked with a hash set; see [`distinct_by_eq`] for element types that are
/// only [`PartialEq`].
pub fn distinct<L>(list: &L) -> Vec<L::Item>
where
    L: List + ?Sized,
    L::Item: Eq + Hash + Clone,
{
    let items = list.elements();
    let mut seen: AHashSet<&L::Item> = AHashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// [`distinct`] for element types without a [`Hash`] implementation (e.g. floats).
///
/// Quadratic in the number of distinct values.
pub fn distinct_by_eq<L>(list: &L) -> Vec<L::Item>
where
    L: List + ?Sized,
    L::Item: PartialEq + Clone,
{
    let mut out: Vec<L::Item> = Vec::new();
    for item in list.elements() {
        if !out.contains(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Projects every element through `mapper` and keeps each projected value once,
/// in first-occurrence order.
pub fn diff<'a, L, B, F>(list: &'a L, mut mapper: F) -> Vec<B>
where
    L: List + ?Sized,
    B: Eq + Hash + Clone,
    F: FnMut(&'a L::Item) -> B,
{
    let mut seen = AHashSet::new();
    let mut out = Vec::new();
    for item in list.elements() {
        let value = mapper(item);
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

/// Merges two collections into one set of unique values.
///
/// Absent or empty inputs contribute nothing. The result has no defined order.
pub fn zip_unique<A, B, T>(first: &A, second: &B) -> AHashSet<T>
where
    A: Collection<Item = T> + ?Sized,
    B: Collection<Item = T> + ?Sized,
    T: Eq + Hash + Clone,
{
    first.items().chain(second.items()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::{diff, distinct, distinct_by_eq, zip_unique};
    use std::collections::HashSet;

    #[test]
    fn distinct_keeps_first_occurrence_order() {
        let input = vec![3, 1, 3, 2, 1, 4];
        assert_eq!(distinct(&input), vec![3, 1, 2, 4]);
        // Original unchanged
        assert_eq!(input, vec![3, 1, 3, 2, 1, 4]);
    }

    #[test]
    fn distinct_is_idempotent() {
        let once = distinct(&["b", "a", "b", "c", "a"]);
        assert_eq!(distinct(&once), once);
    }

    #[test]
    fn distinct_on_absent_input_is_empty() {
        let absent: Option<Vec<i64>> = None;
        assert!(distinct(&absent).is_empty());
    }

    #[test]
    fn distinct_by_eq_and_diff_on_absent_or_empty_input_are_empty() {
        let absent: Option<Vec<f64>> = None;
        assert!(distinct_by_eq(&absent).is_empty());
        assert!(distinct_by_eq(&Vec::<f64>::new()).is_empty());

        let words: Option<Vec<&str>> = None;
        assert!(diff(&words, |w| w.len()).is_empty());
        assert!(diff(&Vec::<&str>::new(), |w| w.len()).is_empty());
    }

    #[test]
    fn distinct_by_eq_handles_floats() {
        assert_eq!(distinct_by_eq(&[1.5, 2.0, 1.5, 0.5]), vec![1.5, 2.0, 0.5]);
    }

    #[test]
    fn diff_dedupes_projected_values() {
        let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
        assert_eq!(diff(&words, |w| w.chars().next()), vec![Some('a'), Some('b'), Some('c')]);
    }

    #[test]
    fn zip_unique_unions_two_collections() {
        let a = vec![1, 2, 3];
        let b: HashSet<i64> = [2, 3, 4].into_iter().collect();
        let mut out: Vec<_> = zip_unique(&a, &b).into_iter().collect();
        out.sort();
        assert_eq!(out, vec![1, 2, 3, 4]);
    }

    #[test]
    fn zip_unique_treats_absent_as_empty() {
        let a: Option<Vec<i64>> = None;
        let b = vec![7, 7, 8];
        let out = zip_unique(&a, &b);
        assert_eq!(out.len(), 2);
        assert!(out.contains(&7) && out.contains(&8));
        assert!(zip_unique(&a, &None::<Vec<i64>>).is_empty());
    }
}
