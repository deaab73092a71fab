//! Error type for the fallible (`try_*`) helpers.

use thiserror::Error;

/// Errors reported by the `try_*` helpers in [`crate::seq`].
///
/// The `Option`-returning helpers never produce this; they use `None` for the
/// same situations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The sequence has no elements, so there is nothing to return.
    #[error("sequence is empty")]
    Empty,
}
