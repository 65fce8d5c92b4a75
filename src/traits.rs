//! Common traits and error types for the indexed heap
//!
//! - [`HeapError`]: the single error type returned by fallible heap operations
//! - [`Compare`]: the ordering capability injected into a heap at construction
//!
//! The heap never hardcodes min or max ordering. Whatever the comparator
//! reports as [`Ordering::Less`] rises toward the root, so [`Natural`] gives a
//! min-heap and [`Reversed`] gives a max-heap.

use std::cmp::Ordering;

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The slot id lies outside `[0, capacity)`
    #[error("slot {slot} is out of range for capacity {capacity}")]
    SlotOutOfRange { slot: usize, capacity: usize },
    /// `peek` or `poll` on a heap with no elements
    #[error("heap is empty")]
    Empty,
    /// The slot is in range but holds no element
    #[error("slot {slot} holds no element")]
    NotFound { slot: usize },
}

/// A total preorder over `E`
///
/// Implemented for every `Fn(&E, &E) -> Ordering`, so closures can be passed
/// straight to [`IndexedBinaryHeap::with_comparator`].
///
/// [`IndexedBinaryHeap::with_comparator`]: crate::IndexedBinaryHeap::with_comparator
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use indexed_collections::traits::{Compare, Natural, Reversed};
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
/// ```
pub trait Compare<E: ?Sized> {
    /// Compares two elements; `Less` means `a` belongs nearer the root
    fn compare(&self, a: &E, b: &E) -> Ordering;
}

impl<E: ?Sized, F> Compare<E> for F
where
    F: Fn(&E, &E) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        self(a, b)
    }
}

/// The natural order of `E` (min-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<E: Ord + ?Sized> Compare<E> for Natural {
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        a.cmp(b)
    }
}

/// Flips another comparator (`Reversed(Natural)` is a max-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<E: ?Sized, C: Compare<E>> Compare<E> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &E, b: &E) -> Ordering {
        self.0.compare(b, a)
    }
}
