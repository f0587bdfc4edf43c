//! Priority-queue facade
//!
//! Renames the [`Heap`] operations to queue vocabulary and adds nothing else:
//!
//! | Queue                  | Heap           |
//! |------------------------|----------------|
//! | `enqueue`              | `insert` at the default priority |
//! | `enqueue_with_priority`| `insert`       |
//! | `dequeue`              | `extract_min`, entry discarded |
//! | `peek`                 | `peek_min`     |
//! | `decrease_priority`    | `decrease_key` |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::PriorityQueue;
//!
//! let mut queue: PriorityQueue<&str> = PriorityQueue::new();
//! queue.enqueue_with_priority("first", 3).unwrap();
//! queue.enqueue_with_priority("second", 1).unwrap();
//! queue.enqueue_with_priority("third", 2).unwrap();
//!
//! assert_eq!(queue.peek(), Ok((&1, &"second")));
//! queue.dequeue().unwrap();
//! assert_eq!(queue.peek(), Ok((&2, &"third")));
//! ```

use crate::binary::BinaryHeap;
use crate::traits::{Heap, HeapError};
use std::borrow::Borrow;
use std::hash::Hash;
use std::marker::PhantomData;

/// A min-priority queue over any [`Heap`]
///
/// # Type Parameters
/// - `T`: The value type
/// - `P`: The priority type, defaults to `u64`
/// - `H`: The underlying heap, defaults to the indexed [`BinaryHeap`]
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P: Ord = u64, H: Heap<T, P> = BinaryHeap<T, P>> {
    heap: H,
    _phantom: PhantomData<(T, P)>,
}

impl<T, P: Ord, H: Heap<T, P>> PriorityQueue<T, P, H> {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self::from_heap(H::new())
    }

    /// Wraps an existing heap
    pub fn from_heap(heap: H) -> Self {
        Self {
            heap,
            _phantom: PhantomData,
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued values
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Enqueues `value` at the default priority (0 for integers)
    pub fn enqueue(&mut self, value: T) -> Result<(), HeapError>
    where
        P: Default,
    {
        self.heap.insert(P::default(), value)
    }

    /// Enqueues `value` at `priority`
    pub fn enqueue_with_priority(&mut self, value: T, priority: P) -> Result<(), HeapError> {
        self.heap.insert(priority, value)
    }

    /// Removes the most urgent entry
    pub fn dequeue(&mut self) -> Result<(), HeapError> {
        self.heap.extract_min().map(|_| ())
    }

    /// Removes and returns the most urgent entry
    pub fn dequeue_entry(&mut self) -> Result<(P, T), HeapError> {
        self.heap.extract_min()
    }

    /// Returns the most urgent entry without removing it
    pub fn peek(&self) -> Result<(&P, &T), HeapError> {
        self.heap.peek_min()
    }

    /// Lowers the priority of a queued value; raising is ignored
    pub fn decrease_priority<Q>(&mut self, value: &Q, new_priority: P) -> Result<(), HeapError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.heap.decrease_key(value, new_priority)
    }

    /// Returns true if `value` is queued
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.heap.contains(value)
    }

    /// Consumes the queue, returning the underlying heap
    pub fn into_heap(self) -> H {
        self.heap
    }
}

impl<T, P: Ord, H: Heap<T, P>> Default for PriorityQueue<T, P, H> {
    fn default() -> Self {
        Self::new()
    }
}
