use thiserror::Error;

/// Convenience result type for the checked aggregates.
pub type ListResult<T> = Result<T, ListError>;

/// Error type returned by the checked aggregation functions.
///
/// Every other operation in this crate is infallible: absent or empty input yields the
/// operation's documented zero/empty value, and caller closure failures are returned as the
/// caller's own error type by the `try_*` functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// An `i64` accumulator overflowed.
    #[error("integer overflow in {operation} after {processed} element(s)")]
    IntegerOverflow {
        operation: &'static str,
        processed: usize,
    },

    #[cfg(feature = "decimal")]
    /// A [`rust_decimal::Decimal`] accumulator overflowed.
    #[error("decimal overflow in {operation} after {processed} element(s)")]
    DecimalOverflow {
        operation: &'static str,
        processed: usize,
    },
}
