//! Common traits for indexed heap data structures
//!
//! This module provides the [`Heap`] trait shared by every heap in this crate,
//! along with the [`HeapError`] taxonomy its fallible operations report.
//!
//! Unlike handle-based heaps, these heaps address resident entries by their
//! *value*: each value may be present at most once, and `decrease_key` looks
//! the value up directly. That makes the value an identity key, so the heaps
//! store `(priority, value)` pairs and keep values unique.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The value is already present in the heap
    DuplicateValue,
    /// The value is not present in the heap
    ValueNotFound,
    /// The operation needs at least one entry, but the heap is empty
    EmptyContainer,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::DuplicateValue => {
                write!(f, "value is already present in the heap")
            }
            HeapError::ValueNotFound => {
                write!(f, "value is not present in the heap")
            }
            HeapError::EmptyContainer => {
                write!(f, "heap is empty")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for value-keyed min-heaps
///
/// Every operation either succeeds or leaves the heap untouched and reports a
/// [`HeapError`]:
/// - `insert` rejects values that are already present
/// - `peek_min` / `extract_min` reject an empty heap
/// - `decrease_key` rejects values that are absent
///
/// # Example
///
/// ```rust
/// use indexed_heaps::{BinaryHeap, Heap, HeapError};
///
/// let mut heap = BinaryHeap::new();
/// heap.insert(3, "three").unwrap();
/// heap.insert(1, "one").unwrap();
/// heap.insert(2, "two").unwrap();
///
/// assert_eq!(heap.insert(7, "two"), Err(HeapError::DuplicateValue));
///
/// heap.decrease_key("three", 0).unwrap();
/// assert_eq!(heap.peek_min(), Ok((&0, &"three")));
/// assert_eq!(heap.extract_min(), Ok((0, "three")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of entries in the heap
    fn len(&self) -> usize;

    /// Inserts `item` with the given priority
    ///
    /// # Errors
    /// Returns `HeapError::DuplicateValue` if `item` is already present.
    fn insert(&mut self, priority: P, item: T) -> Result<(), HeapError>;

    /// Returns the minimum priority and its value without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    fn peek_min(&self) -> Result<(&P, &T), HeapError>;

    /// Removes and returns the minimum priority and its value
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    fn extract_min(&mut self) -> Result<(P, T), HeapError>;

    /// Lowers the priority of a resident value
    ///
    /// Priorities never increase through this operation: if `new_priority` is
    /// not strictly less than the current priority the call does nothing and
    /// still returns `Ok(())`.
    ///
    /// # Errors
    /// Returns `HeapError::ValueNotFound` if `item` is not present.
    fn decrease_key<Q>(&mut self, item: &Q, new_priority: P) -> Result<(), HeapError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Returns true if `item` is currently present
    fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized;
}
