//! bf - small helpers over ordered sequences
//!
//! # Overview
//!
//! Every helper lives in [`bf_core`] and is re-exported here, so callers can
//! depend on this one crate and reach everything through a single namespace.
//!
//! # Quick Start
//!
//! ```
//! assert_eq!(bf::last(&[1, 2, 3, 4, 5]), Some(&5));
//! assert_eq!(bf::BF.last(&[1, 2, 3, 4, 5]), Some(&5));
//!
//! let empty: Vec<i32> = Vec::new();
//! assert_eq!(bf::last(&empty), None);
//! assert_eq!(bf::try_last(&empty), Err(bf::Error::Empty));
//! ```
//!
//! # Custom Sequences
//!
//! Any type with positional access can opt in by implementing [`Sequence`]:
//!
//! ```
//! use bf::Sequence;
//!
//! struct Pair(u8, u8);
//!
//! impl Sequence for Pair {
//!     type Item = u8;
//!
//!     fn len(&self) -> usize {
//!         2
//!     }
//!
//!     fn get(&self, index: usize) -> Option<&u8> {
//!         match index {
//!             0 => Some(&self.0),
//!             1 => Some(&self.1),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(bf::last(&Pair(4, 2)), Some(&2));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

// Re-export the helpers themselves, not wrappers around them.
pub use bf_core::Error;
pub use bf_core::seq::{self, Sequence, first, last, last_of, try_first, try_last};

/// Aggregate handle over the helpers, for `BF.last(..)` style call sites.
///
/// Each method forwards to the function of the same name in [`seq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bf;

/// The aggregate handle. See [`Bf`].
pub const BF: Bf = Bf;

impl Bf {
    #[inline]
    pub fn last<'a, S>(self, seq: &'a S) -> Option<&'a S::Item>
    where
        S: Sequence + ?Sized,
    {
        seq::last(seq)
    }

    #[inline]
    pub fn first<'a, S>(self, seq: &'a S) -> Option<&'a S::Item>
    where
        S: Sequence + ?Sized,
    {
        seq::first(seq)
    }

    #[inline]
    pub fn try_last<'a, S>(self, seq: &'a S) -> Result<&'a S::Item, Error>
    where
        S: Sequence + ?Sized,
    {
        seq::try_last(seq)
    }

    #[inline]
    pub fn last_of<I>(self, items: I) -> Option<I::Item>
    where
        I: IntoIterator,
    {
        seq::last_of(items)
    }
}
