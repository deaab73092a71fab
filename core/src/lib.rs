#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Sequence helpers.
//!
//! Every helper borrows its input and never mutates it. Helpers that may find
//! nothing to return (an empty sequence) return `Option`, with `try_*`
//! variants reporting the same case as [`Error::Empty`].

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod error;
pub mod seq;

pub use error::Error;
