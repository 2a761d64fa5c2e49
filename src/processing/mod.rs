//! Eager, stateless operations over [`crate::types::Collection`]s and [`crate::types::List`]s.
//!
//! Every function borrows its input, never mutates it, and returns a freshly allocated result.
//! Absent (`None`) and empty inputs produce the operation's documented empty/zero/`None` value.
//!
//! - [`map`]: map, indexed map, filtering and flattening maps, for-each, to-string
//! - [`filter`]: filter, find/first, find-by-hash, find-map, index-of, any/all
//! - [`set`]: distinct, diff, union-to-set
//! - [`reduce`]: min/max/sum (integer and decimal), count, reduce-to-string, fold
//! - [`construct`]: of, unshift, merge, join
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use rust_list_processing::processing::{filter, join, map, sum_by};
//!
//! #[derive(Clone)]
//! struct Order {
//!     id: i64,
//!     paid: bool,
//!     cents: i64,
//! }
//!
//! let orders = vec![
//!     Order { id: 1, paid: true, cents: 1_000 },
//!     Order { id: 2, paid: false, cents: 2_000 },
//!     Order { id: 3, paid: true, cents: 500 },
//! ];
//!
//! let paid = filter(&orders, |o| o.paid);
//! let ids = map(&paid, |o| o.id);
//!
//! assert_eq!(join(",", &ids), "1,3");
//! assert_eq!(sum_by(&paid, |o| o.cents), 1_500);
//! ```

pub mod construct;
pub mod filter;
pub mod map;
pub mod reduce;
pub mod set;

pub use construct::{join, merge, of, unshift};
pub use filter::{
    all, any, filter, find, find_by_hash, find_map, first, first_element, index_of, try_filter, try_find,
};
pub use map::{each, filter_map, flat_map, flat_map_unique, map, map_indexed, to_string_list, try_each, try_map};
#[cfg(feature = "decimal")]
pub use reduce::{checked_sum_decimal, max_decimal, min_decimal, sum_decimal};
pub use reduce::{
    checked_sum, checked_sum_by, count, fold, max_int, min, min_int, reduce_int, reduce_to_string, sum, sum_by,
    ReduceOp,
};
pub use set::{diff, distinct, distinct_by_eq, zip_unique};
