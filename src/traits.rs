//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for priority queues:
//!
//! - [`Heap`]: Base trait with push/peek/pop/merge, shaped like Rust's `BinaryHeap`
//! - [`DecreaseKeyHeap`]: Extended trait adding handle-based `decrease_key` and `erase`
//!
//! Unlike heaps that separate a priority from a payload, the value stored here
//! *is* the ordering key: anything `Ord` can be pushed. Callers that want a
//! payload can push `(priority, item)` tuples.

use thiserror::Error;

/// Error type for handle-based heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The new value is greater than the value currently at the handle's position
    #[error("new value is greater than the current value")]
    InvalidDecrease,
    /// The handle no longer refers to a node of this heap (removed, or issued by another heap)
    #[error("handle does not refer to a live node of this heap")]
    DanglingHandle,
}

/// A handle to an element in the heap, used for `decrease_key` and `erase`
///
/// This is an opaque type that identifies a specific element in the heap.
pub trait Handle: Clone + PartialEq + Eq {}

/// Base trait for heap/priority queue data structures
///
/// # Example
///
/// ```rust
/// use binomial_forest::Heap;
/// use binomial_forest::forest::BinomialForest;
///
/// let mut heap = BinomialForest::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a value
    ///
    /// # Time Complexity
    /// O(log n) for the binomial forest.
    fn push(&mut self, value: T);

    /// Returns the minimum value without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while this is a min-heap.
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum value
    fn pop(&mut self) -> Option<T>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}

/// Extended heap trait with `decrease_key` and `erase` support
///
/// # Example
///
/// ```rust
/// use binomial_forest::{DecreaseKeyHeap, Heap};
/// use binomial_forest::forest::BinomialForest;
///
/// let mut heap = BinomialForest::new();
/// let handle = heap.push_with_handle(10);
/// heap.push(7);
/// heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some(&5));
/// ```
pub trait DecreaseKeyHeap<T: Ord>: Heap<T> {
    /// The handle type for this heap
    type Handle: Handle;

    /// Inserts a value, returning a handle to its position
    fn push_with_handle(&mut self, value: T) -> Self::Handle;

    /// Lowers the value at the handle's position
    ///
    /// # Errors
    /// - [`HeapError::InvalidDecrease`] if `new_value` is greater than the current value
    /// - [`HeapError::DanglingHandle`] if the handle is no longer valid
    fn decrease_key(&mut self, handle: &Self::Handle, new_value: T) -> Result<(), HeapError>;

    /// Removes the value at the handle's position and returns it
    ///
    /// # Errors
    /// [`HeapError::DanglingHandle`] if the handle is no longer valid.
    fn erase(&mut self, handle: &Self::Handle) -> Result<T, HeapError>;
}
