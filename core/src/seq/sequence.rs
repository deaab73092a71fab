use alloc::{boxed::Box, collections::VecDeque, vec::Vec};

/// A finite, ordered collection with O(1) positional access.
///
/// Implementors only hand out shared references, so accessors built on this
/// trait can never mutate the sequence they are given.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    /// Element at `index`, or `None` when `index >= self.len()`.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

// Indexing is relative to the logical front, so this stays correct after
// the ring buffer wraps.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Sequence for smallvec::SmallVec<A> {
    type Item = A::Item;

    #[inline]
    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&A::Item> {
        <[A::Item]>::get(self, index)
    }
}

#[cfg(feature = "bumpalo")]
impl<T> Sequence for bumpalo::collections::Vec<'_, T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        bumpalo::collections::Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}
