//! Scanning Binary Heap implementation
//!
//! A binary min-heap without a position index. It honours the same
//! [`Heap`] contract as [`BinaryHeap`](crate::binary::BinaryHeap) (duplicate
//! rejection, empty guards, decrease-key that never raises a priority), but
//! finds a value by walking the storage.
//!
//! It is kept as a baseline: differential tests run it side by side with the
//! indexed heap, and the benchmark harness can time it to show what the index
//! buys. Values only need `PartialEq` here.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(n)       |
//! | `extract_min`  | O(log n)   |
//! | `peek_min`     | O(1)       |
//! | `decrease_key` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::Heap;
//! use indexed_heaps::scan_binary::ScanBinaryHeap;
//!
//! let mut heap: ScanBinaryHeap<&str> = ScanBinaryHeap::new();
//! heap.insert(3, "three").unwrap();
//! heap.insert(1, "one").unwrap();
//! heap.insert(2, "two").unwrap();
//!
//! assert_eq!(heap.peek_min(), Ok((&1, &"one")));
//! heap.decrease_key("three", 0).unwrap();
//! assert_eq!(heap.extract_min(), Ok((0, "three")));
//! assert_eq!(heap.extract_min(), Ok((1, "one")));
//! ```

use crate::traits::{Heap, HeapError};
use std::borrow::Borrow;
use std::hash::Hash;

/// A binary min-heap that locates values by linear scan
#[derive(Debug, Clone)]
pub struct ScanBinaryHeap<T, P: Ord = u64> {
    /// The heap data stored as a vector of (priority, value) pairs
    data: Vec<(P, T)>,
}

impl<T: PartialEq, P: Ord> Heap<T, P> for ScanBinaryHeap<T, P> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, priority: P, item: T) -> Result<(), HeapError> {
        if self.data.iter().any(|(_, t)| *t == item) {
            return Err(HeapError::DuplicateValue);
        }

        self.data.push((priority, item));
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    fn peek_min(&self) -> Result<(&P, &T), HeapError> {
        self.data
            .first()
            .map(|(p, t)| (p, t))
            .ok_or(HeapError::EmptyContainer)
    }

    fn extract_min(&mut self) -> Result<(P, T), HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyContainer);
        }

        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    fn decrease_key<Q>(&mut self, item: &Q, new_priority: P) -> Result<(), HeapError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.position(item).ok_or(HeapError::ValueNotFound)?;

        if new_priority >= self.data[index].0 {
            return Ok(());
        }

        self.data[index].0 = new_priority;
        self.sift_up(index);
        Ok(())
    }

    fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(item).is_some()
    }
}

impl<T, P: Ord> ScanBinaryHeap<T, P> {
    fn position<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.data
            .iter()
            .position(|(_, t)| <T as Borrow<Q>>::borrow(t) == item)
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].0 < self.data[parent].0 {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].0 < self.data[smallest].0 {
                smallest = left;
            }
            if right < len && self.data[right].0 < self.data[smallest].0 {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T: PartialEq, P: Ord> Default for ScanBinaryHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
