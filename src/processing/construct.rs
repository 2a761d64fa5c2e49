//! Building and combining lists, and joining them into text.

use std::fmt::Display;

use crate::types::List;

/// Collects `elements` into a new `Vec`, in the order given.
///
/// See also the [`list_of!`](crate::list_of) macro for the variadic form.
pub fn of<T, I>(elements: I) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    elements.into_iter().collect()
}

/// Returns `elements` followed by every element of `list`, as a new `Vec`.
///
/// `list` is left untouched; an absent list contributes nothing.
pub fn unshift<L>(list: &L, elements: &[L::Item]) -> Vec<L::Item>
where
    L: List + ?Sized,
    L::Item: Clone,
{
    let tail = list.elements();
    let mut out = Vec::with_capacity(elements.len() + tail.len());
    out.extend_from_slice(elements);
    out.extend_from_slice(tail);
    out
}

/// Concatenates `lists` in argument order into a new `Vec`.
pub fn merge<L>(lists: &[L]) -> Vec<L::Item>
where
    L: List,
    L::Item: Clone,
{
    let total = lists.iter().map(|l| l.elements().len()).sum();
    let mut out = Vec::with_capacity(total);
    for list in lists {
        out.extend_from_slice(list.elements());
    }
    out
}

/// Joins the [`Display`] text of each token with `delimiter`.
///
/// No leading or trailing delimiter is written; an empty iterable yields an empty `String`.
///
/// # Panics
///
/// Panics if a token's [`Display`] implementation returns an error, as [`ToString`] does.
pub fn join<I>(delimiter: &str, tokens: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (idx, token) in tokens.into_iter().enumerate() {
        if idx > 0 {
            out.push_str(delimiter);
        }
        out.push_str(&token.to_string());
    }
    out
}

/// Builds a `Vec` from a comma-separated list of elements.
///
/// ```rust
/// use rust_list_processing::list_of;
///
/// let v = list_of![1, 2, 3];
/// assert_eq!(v, vec![1, 2, 3]);
///
/// let empty: Vec<i32> = list_of![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list_of {
    ($($element:expr),* $(,)?) => {
        $crate::processing::of([$($element),*])
    };
}

#[cfg(test)]
mod tests {
    use super::{join, merge, of, unshift};
    use std::fmt;
    use std::panic;

    struct BrokenDisplay;

    impl fmt::Display for BrokenDisplay {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn of_preserves_given_order() {
        assert_eq!(of([3, 1, 2]), vec![3, 1, 2]);
        assert_eq!(crate::list_of!["a", "b"], vec!["a", "b"]);
    }

    #[test]
    fn unshift_prepends_without_mutating() {
        let original = vec![2, 3];
        assert_eq!(unshift(&original, &[0, 1]), vec![0, 1, 2, 3]);
        assert_eq!(original, vec![2, 3]);

        let absent: Option<Vec<i64>> = None;
        assert_eq!(unshift(&absent, &[9]), vec![9]);
    }

    #[test]
    fn merge_concatenates_in_argument_order() {
        assert_eq!(merge(&[vec![1, 2], vec![3], vec![]]), vec![1, 2, 3]);
        assert!(merge::<Vec<i64>>(&[]).is_empty());
        assert_eq!(merge(&[Some(vec![1]), None, Some(vec![2])]), vec![1, 2]);
    }

    #[test]
    fn join_separates_with_delimiter() {
        assert_eq!(join(",", ["a", "b", "c"]), "a,b,c");
        assert_eq!(join(",", Vec::<String>::new()), "");
        assert_eq!(join(" | ", [1, 2]), "1 | 2");
        assert_eq!(join("-", ["solo"]), "solo");
    }

    #[test]
    fn join_propagates_display_failure() {
        let result = panic::catch_unwind(|| join(",", [BrokenDisplay, BrokenDisplay]));
        assert!(result.is_err());
    }
}
