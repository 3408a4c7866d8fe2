//! Error type for all-or-nothing write variants.

use snafu::Snafu;

/// Error returned by the `try_` write variants when the requested bytes do
/// not all fit.
///
/// The count-returning operations never produce this error; they truncate
/// silently and report the short count instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
#[snafu(display(
    "insufficient free space: requested {requested} bytes, {available} available"
))]
pub struct CapacityError {
    /// Bytes the caller asked to store.
    pub requested: usize,
    /// Free bytes at the time of the call.
    pub available: usize,
}
