//! `rust-list-processing` is a small library of eager, stateless helpers over homogeneous
//! collections: map, filter, find, reduce-style aggregates, set operations and string joining.
//!
//! Every operation borrows its input, never mutates it, and returns a freshly allocated result.
//! Inputs may be *absent*: any `Option<C>` of a supported collection is itself a collection, and
//! `None` behaves exactly like an empty input.
//!
//! ## What you can pass in
//!
//! - [`types::List`] (ordered, index-addressable): `Vec<T>`, `[T]`, `[T; N]`
//! - [`types::Collection`] (iterable): all of the above, plus `VecDeque`, `HashSet`,
//!   `ahash::AHashSet` and `BTreeSet`
//! - `Option<_>` and `&_` of any of these
//!
//! ## Empty-input policy
//!
//! No operation fails on absent or empty input. Each has a documented fallback:
//!
//! - list-producing operations return an empty `Vec` / set
//! - lookups ([`processing::find`], [`processing::find_map`], [`processing::index_of`]) return `None`
//! - [`processing::any`] **and** [`processing::all`] return `false`
//! - integer aggregates return `0`, decimal aggregates `Decimal::ZERO`, text aggregates `""`
//!
//! ## Quick example
//!
//! ```rust
//! use rust_list_processing::processing::{all, any, distinct, find_map, join, max_int, merge, min_int, sum};
//!
//! let scores = vec![3i64, 1, 2, 3];
//!
//! assert_eq!(distinct(&scores), vec![3, 1, 2]);
//! assert_eq!(min_int(&scores, |s| *s), 1);
//! assert_eq!(max_int(&scores, |s| *s), 3);
//! assert_eq!(sum(&scores), 9);
//! assert_eq!(join(",", &scores), "3,1,2,3");
//! assert_eq!(merge(&[vec![1, 2], vec![3], vec![]]), vec![1, 2, 3]);
//!
//! let words = ["", "", "x", "y"];
//! assert_eq!(find_map(&words, |w| (!w.is_empty()).then_some(*w)), Some("x"));
//!
//! let absent: Option<Vec<i64>> = None;
//! assert!(!any(&absent, |_| true));
//! assert!(!all(&absent, |_| true));
//! assert_eq!(sum(&absent), 0);
//! ```
//!
//! ## Failing callbacks
//!
//! A panicking closure unwinds straight through the call; no partial result is returned. For
//! closures that report failure as a `Result`, use the `try_*` variants
//! ([`processing::try_map`], [`processing::try_filter`], [`processing::try_find`],
//! [`processing::try_each`]), which stop at the first `Err` and return it.
//!
//! ## Cargo features
//!
//! - `decimal` (default): `rust_decimal`-based aggregates such as [`processing::sum_decimal`].
//!
//! ## Modules
//!
//! - [`processing`]: all operations
//! - [`types`]: the [`types::Collection`] / [`types::List`] input traits
//! - [`error`]: errors from the checked aggregates

pub mod error;
pub mod processing;
pub mod types;

pub use error::{ListError, ListResult};
