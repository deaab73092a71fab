//! Ordered, indexable sequences and the accessors built on them.
//!
//! - [`Sequence`]: the read-only view every accessor works through
//! - [`last`], [`first`]: positional accessors returning `None` when empty
//! - [`try_last`], [`try_first`]: the same, reporting [`crate::Error::Empty`]
//! - [`last_of`]: last item of a sequential-only source (any `IntoIterator`)

mod access;
mod sequence;

pub use access::{first, last, last_of, try_first, try_last};
pub use sequence::Sequence;
