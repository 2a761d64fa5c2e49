//! Aggregations: integer and decimal min/max/sum, counting, text concatenation and folds.
//!
//! Every aggregate returns its zero value (`0`, `Decimal::ZERO`, `""`) for absent or empty
//! input rather than signalling "no value".
//!
//! Unchecked integer aggregates wrap on overflow regardless of build profile. The `checked_*`
//! variants report overflow as a [`ListError`] instead.

#[cfg(feature = "decimal")]
use rust_decimal::Decimal;

use crate::error::{ListError, ListResult};
use crate::types::Collection;

/// Built-in reductions over an `i64` projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Wrapping sum of the projected values.
    Sum,
    /// Smallest projected value.
    Min,
    /// Largest projected value.
    Max,
}

/// Reduce the elements of `list` through `projection` using a built-in [`ReduceOp`].
///
/// Returns `0` for absent or empty input, whatever the op.
pub fn reduce_int<C, F>(list: &C, op: ReduceOp, mut projection: F) -> i64
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> i64,
{
    let mut acc: Option<i64> = None;
    for item in list.items() {
        let v = projection(item);
        acc = Some(match (op, acc) {
            (_, None) => v,
            (ReduceOp::Sum, Some(a)) => a.wrapping_add(v),
            (ReduceOp::Min, Some(a)) => a.min(v),
            (ReduceOp::Max, Some(a)) => a.max(v),
        });
    }
    acc.unwrap_or(0)
}

/// Minimum of `projection` over the elements; `0` for absent/empty input.
pub fn min_int<C, F>(list: &C, projection: F) -> i64
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> i64,
{
    reduce_int(list, ReduceOp::Min, projection)
}

/// Alias of [`min_int`].
pub fn min<C, F>(list: &C, projection: F) -> i64
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> i64,
{
    min_int(list, projection)
}

/// Maximum of `projection` over the elements; `0` for absent/empty input.
pub fn max_int<C, F>(list: &C, projection: F) -> i64
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> i64,
{
    reduce_int(list, ReduceOp::Max, projection)
}

/// Sum of the elements themselves; `0` for absent/empty input.
pub fn sum<C>(list: &C) -> i64
where
    C: Collection<Item = i64> + ?Sized,
{
    list.items().fold(0i64, |acc, v| acc.wrapping_add(*v))
}

/// Sum of `projection` over the elements; `0` for absent/empty input.
pub fn sum_by<C, F>(list: &C, projection: F) -> i64
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> i64,
{
    reduce_int(list, ReduceOp::Sum, projection)
}

/// Like [`sum`], but fails with [`ListError::IntegerOverflow`] instead of wrapping.
pub fn checked_sum<C>(list: &C) -> ListResult<i64>
where
    C: Collection<Item = i64> + ?Sized,
{
    checked_sum_by(list, |v| *v)
}

/// Like [`sum_by`], but fails with [`ListError::IntegerOverflow`] instead of wrapping.
pub fn checked_sum_by<C, F>(list: &C, mut projection: F) -> ListResult<i64>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> i64,
{
    let mut total = 0i64;
    for (processed, item) in list.items().enumerate() {
        total = total.checked_add(projection(item)).ok_or_else(|| {
            log::debug!("checked_sum_by: i64 overflow at element {processed}");
            ListError::IntegerOverflow {
                operation: "sum",
                processed,
            }
        })?;
    }
    Ok(total)
}

/// Number of elements satisfying `predicate`; `0` for absent/empty input.
pub fn count<C, F>(list: &C, mut predicate: F) -> usize
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    list.items().filter(|item| predicate(item)).count()
}

/// Concatenates the text produced by `mapper` for each element, with no separator.
///
/// Absent or empty input yields an empty `String`.
pub fn reduce_to_string<C, S, F>(list: &C, mut mapper: F) -> String
where
    C: Collection + ?Sized,
    S: AsRef<str>,
    F: FnMut(&C::Item) -> S,
{
    let mut out = String::new();
    for item in list.items() {
        out.push_str(mapper(item).as_ref());
    }
    out
}

/// Left fold over the elements, starting from `init`.
///
/// This is similar to `Iterator::fold`, but accepts any [`Collection`] including absent ones
/// (which return `init` unchanged).
pub fn fold<'a, C, A, F>(list: &'a C, init: A, reducer: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &'a C::Item) -> A,
{
    list.items().fold(init, reducer)
}

/// Minimum of a decimal `projection`; [`Decimal::ZERO`] for absent/empty input.
#[cfg(feature = "decimal")]
pub fn min_decimal<C, F>(list: &C, projection: F) -> Decimal
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> Decimal,
{
    list.items().map(projection).min().unwrap_or(Decimal::ZERO)
}

/// Maximum of a decimal `projection`; [`Decimal::ZERO`] for absent/empty input.
#[cfg(feature = "decimal")]
pub fn max_decimal<C, F>(list: &C, projection: F) -> Decimal
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> Decimal,
{
    list.items().map(projection).max().unwrap_or(Decimal::ZERO)
}

/// Sum of a decimal `projection`; [`Decimal::ZERO`] for absent/empty input.
///
/// # Panics
///
/// Panics if the running total overflows `Decimal`'s range. Use [`checked_sum_decimal`] to get
/// an error instead.
#[cfg(feature = "decimal")]
pub fn sum_decimal<C, F>(list: &C, projection: F) -> Decimal
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> Decimal,
{
    list.items().map(projection).fold(Decimal::ZERO, |acc, v| acc + v)
}

/// Like [`sum_decimal`], but fails with [`ListError::DecimalOverflow`] instead of panicking.
#[cfg(feature = "decimal")]
pub fn checked_sum_decimal<C, F>(list: &C, mut projection: F) -> ListResult<Decimal>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> Decimal,
{
    let mut total = Decimal::ZERO;
    for (processed, item) in list.items().enumerate() {
        total = total.checked_add(projection(item)).ok_or_else(|| {
            log::debug!("checked_sum_decimal: overflow at element {processed}");
            ListError::DecimalOverflow {
                operation: "sum_decimal",
                processed,
            }
        })?;
    }
    Ok(total)
}
