//! Indexed Binary Heap implementation
//!
//! An array-backed binary min-heap paired with a position index that maps
//! every resident value to its current slot. The index is what makes
//! `decrease_key` O(log n): the value is found in O(1) instead of by a
//! linear scan, then sifted up from where it sits.
//!
//! # Invariants
//!
//! Between public calls:
//! - **Heap property**: `priority(parent) <= priority(child)` for every slot
//!   `i > 0`, with the parent at `(i - 1) / 2`.
//! - **Position index**: for every slot `i` holding value `v`, the index maps
//!   `v -> i`, and it holds no other keys.
//!
//! Every structural change goes through `swap_entries` or `record_position`,
//! so the storage and the index are never updated one without the other.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_min`  | O(log n)   |
//! | `peek_min`     | O(1)       |
//! | `decrease_key` | O(log n)   |
//! | `contains`     | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{BinaryHeap, Heap};
//!
//! let mut heap: BinaryHeap<&str> = BinaryHeap::new();
//! heap.insert(10, "high").unwrap();
//! heap.insert(5, "medium").unwrap();
//! heap.insert(1, "low").unwrap();
//!
//! heap.decrease_key("high", 0).unwrap();
//! assert_eq!(heap.peek_min(), Ok((&0, &"high")));
//!
//! // Raising a priority is ignored
//! heap.decrease_key("low", 50).unwrap();
//! assert_eq!(heap.priority("low"), Some(&1));
//! ```

use crate::traits::{Heap, HeapError};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

/// A binary min-heap with a value-to-slot index
///
/// Values are identity keys: each value may be resident at most once. A value
/// is kept twice, once in the ordered storage and once as its index key,
/// hence the `Clone` bound.
///
/// # Type Parameters
/// - `T`: The value type, must be `Hash + Eq + Clone`
/// - `P`: The priority type, defaults to `u64`
#[derive(Clone)]
pub struct BinaryHeap<T, P: Ord = u64> {
    /// The heap data stored as a vector of (priority, value) pairs
    data: Vec<(P, T)>,
    /// Current slot of every resident value
    positions: FxHashMap<T, usize>,
}

impl<T, P> Heap<T, P> for BinaryHeap<T, P>
where
    T: Hash + Eq + Clone,
    P: Ord,
{
    fn new() -> Self {
        Self {
            data: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, priority: P, item: T) -> Result<(), HeapError> {
        if self.positions.contains_key(&item) {
            return Err(HeapError::DuplicateValue);
        }

        let index = self.data.len();
        self.positions.insert(item.clone(), index);
        self.data.push((priority, item));
        self.sift_up(index);
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

        // The last entry takes over the root slot
        let min = self.data.swap_remove(0);
        self.positions.remove(&min.1);

        if !self.data.is_empty() {
            self.record_position(0);
            self.sift_down(0);
        }

        Ok(min)
    }

    fn decrease_key<Q>(&mut self, item: &Q, new_priority: P) -> Result<(), HeapError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = *self.positions.get(item).ok_or(HeapError::ValueNotFound)?;

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
        self.positions.contains_key(item)
    }
}

impl<T, P> BinaryHeap<T, P>
where
    T: Hash + Eq + Clone,
    P: Ord,
{
    /// Creates an empty heap with room for `capacity` entries in both the
    /// storage and the position index
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the current priority of a resident value
    pub fn priority<Q>(&self, item: &Q) -> Option<&P>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(item).map(|&index| &self.data[index].0)
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.data.clear();
        self.positions.clear();
    }

    /// Checks the heap property and the position index against the storage
    ///
    /// Returns false if any parent has a greater priority than its child, or
    /// if the index is not an exact value-to-slot mapping of the storage.
    pub fn verify_invariants(&self) -> bool {
        let heap_ordered =
            (1..self.data.len()).all(|i| self.data[(i - 1) / 2].0 <= self.data[i].0);

        let indexed = self.positions.len() == self.data.len()
            && self
                .data
                .iter()
                .enumerate()
                .all(|(i, (_, item))| self.positions.get(item) == Some(&i));

        heap_ordered && indexed
    }

    /// Points the index entry of the value at `index` back to `index`
    #[inline]
    fn record_position(&mut self, index: usize) {
        let slot = self.positions.get_mut(&self.data[index].1);
        debug_assert!(slot.is_some(), "resident value missing from position index");
        if let Some(slot) = slot {
            *slot = index;
        }
    }

    /// Swaps two slots and both of their index entries
    #[inline]
    fn swap_entries(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.data.swap(a, b);
        self.record_position(a);
        self.record_position(b);
    }

    /// Move entry at index up while it is strictly less than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].0 < self.data[parent].0 {
                self.swap_entries(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move entry at index down while a child is strictly less than it
    ///
    /// Ties between the children go to the left child.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let mut smallest = left;
            if right < len && self.data[right].0 < self.data[left].0 {
                smallest = right;
            }

            if self.data[smallest].0 < self.data[index].0 {
                self.swap_entries(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T, P> Default for BinaryHeap<T, P>
where
    T: Hash + Eq + Clone,
    P: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P: Ord + fmt::Debug> fmt::Debug for BinaryHeap<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
