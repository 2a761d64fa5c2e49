//! Input model shared by every operation.
//!
//! Operations accept any [`Collection`] (iterable, possibly unordered) or, when they need
//! positions, any [`List`] (ordered and index-addressable). `Option<C>` is itself a collection:
//! `None` is the *absent* input and behaves exactly like an empty one.
//!
//! ```rust
//! use rust_list_processing::types::{Collection, List};
//!
//! let present = Some(vec![1, 2, 3]);
//! let absent: Option<Vec<i32>> = None;
//!
//! assert_eq!(present.items().count(), 3);
//! assert!(absent.is_empty_or_absent());
//! assert!(absent.elements().is_empty());
//! ```

use std::collections::{BTreeSet, HashSet, VecDeque};

use ahash::AHashSet;

/// A borrowed, iterable source of elements.
///
/// Iteration order is the collection's natural order; for hash sets that order is unspecified.
pub trait Collection {
    /// Element type.
    type Item;

    /// Iterate the elements by reference.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;

    /// `true` when the collection is absent (`None`) or has no elements.
    fn is_empty_or_absent(&self) -> bool {
        self.items().next().is_none()
    }
}

/// An ordered, index-addressable [`Collection`].
pub trait List: Collection {
    /// View the elements as a slice. Absent lists yield an empty slice.
    fn elements(&self) -> &[Self::Item];
}

impl<T> Collection for [T] {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn is_empty_or_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T> List for [T] {
    fn elements(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn is_empty_or_absent(&self) -> bool {
        N == 0
    }
}

impl<T, const N: usize> List for [T; N] {
    fn elements(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn is_empty_or_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T> List for Vec<T> {
    fn elements(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, S> Collection for HashSet<T, S> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T, S> Collection for AHashSet<T, S> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T> Collection for BTreeSet<T> {
    type Item = T;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<C: Collection> Collection for Option<C> {
    type Item = C::Item;

    fn items(&self) -> impl Iterator<Item = &C::Item> {
        self.iter().flat_map(|c| c.items())
    }
}

impl<L: List> List for Option<L> {
    fn elements(&self) -> &[L::Item] {
        match self {
            Some(list) => list.elements(),
            None => Default::default(),
        }
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;

    fn items(&self) -> impl Iterator<Item = &C::Item> {
        (**self).items()
    }

    fn is_empty_or_absent(&self) -> bool {
        (**self).is_empty_or_absent()
    }
}

impl<L: List + ?Sized> List for &L {
    fn elements(&self) -> &[L::Item] {
        (**self).elements()
    }
}

#[cfg(test)]
mod tests {
    use super::{Collection, List};
    use std::collections::{BTreeSet, VecDeque};

    #[test]
    fn absent_behaves_like_empty() {
        let absent: Option<Vec<i64>> = None;
        assert!(absent.is_empty_or_absent());
        assert_eq!(absent.items().count(), 0);
        assert!(absent.elements().is_empty());

        let empty: Vec<i64> = Vec::new();
        assert!(empty.is_empty_or_absent());
    }

    #[test]
    fn present_option_exposes_inner_elements() {
        let v = vec![1, 2, 3];
        let wrapped = Some(&v);
        assert_eq!(wrapped.elements(), &[1, 2, 3]);
        assert_eq!(wrapped.items().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(!wrapped.is_empty_or_absent());
    }

    #[test]
    fn non_list_collections_iterate_in_their_own_order() {
        let deque: VecDeque<i64> = [3, 1, 2].into_iter().collect();
        assert_eq!(deque.items().copied().collect::<Vec<_>>(), vec![3, 1, 2]);

        let tree: BTreeSet<i64> = [3, 1, 2].into_iter().collect();
        assert_eq!(tree.items().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(BTreeSet::<i64>::new().is_empty_or_absent());
    }

    #[test]
    fn arrays_and_slices_are_lists() {
        let arr = [1, 2];
        assert_eq!(arr.elements(), &[1, 2]);
        assert_eq!(arr[..1].elements(), &[1]);
        assert!([0u8; 0].is_empty_or_absent());
    }
}
