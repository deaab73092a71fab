//! Positional accessors over [`Sequence`].

use super::Sequence;
use crate::Error;

// ============================================================================
// Optional Accessors
// ============================================================================

/// Get the last element of a sequence
///
/// Returns a reference to the element at position `len - 1`, untouched.
/// An empty sequence yields `None` rather than an error.
///
/// # Examples
/// - `last(&[1, 2, 3, 4, 5])` → `Some(&5)`
/// - `last(&["a"])` → `Some(&"a")`
/// - `last::<[i32]>(&[])` → `None`
#[inline]
pub fn last<S>(seq: &S) -> Option<&S::Item>
where
    S: Sequence + ?Sized,
{
    let index = seq.len().checked_sub(1)?;
    seq.get(index)
}

/// Get the first element of a sequence
///
/// # Examples
/// - `first(&[1, 2, 3])` → `Some(&1)`
/// - `first::<[i32]>(&[])` → `None`
#[inline]
pub fn first<S>(seq: &S) -> Option<&S::Item>
where
    S: Sequence + ?Sized,
{
    seq.get(0)
}

// ============================================================================
// Fallible Accessors
// ============================================================================

/// Like [`last`], but an empty sequence is reported as [`Error::Empty`].
pub fn try_last<S>(seq: &S) -> Result<&S::Item, Error>
where
    S: Sequence + ?Sized,
{
    last(seq).ok_or_else(|| {
        tracing::debug!("last element requested from an empty sequence");
        Error::Empty
    })
}

/// Like [`first`], but an empty sequence is reported as [`Error::Empty`].
pub fn try_first<S>(seq: &S) -> Result<&S::Item, Error>
where
    S: Sequence + ?Sized,
{
    first(seq).ok_or_else(|| {
        tracing::debug!("first element requested from an empty sequence");
        Error::Empty
    })
}

// ============================================================================
// Sequential Sources
// ============================================================================

/// Get the last item of anything iterable
///
/// For sources without positional access (linked lists, `str::chars`,
/// arbitrary iterators). Walks the whole source unless the iterator
/// overrides `Iterator::last`, so this is O(n) in general.
///
/// # Examples
/// - `last_of("abc".chars())` → `Some('c')`
/// - `last_of(core::iter::empty::<i32>())` → `None`
pub fn last_of<I>(items: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    items.into_iter().last()
}

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;
