//! Indexed Heap Data Structures for Rust
//!
//! This crate provides a binary min-heap whose entries can be found by value,
//! giving O(log n) `decrease_key` without handles or linear scans. It is meant
//! for the inner loop of algorithms such as Dijkstra's shortest path or
//! discrete-event simulation, where a queued item's priority has to be lowered
//! in place.
//!
//! # Features
//!
//! - **Indexed Binary Heap**: O(log n) insert, extract-min and decrease_key; O(1) peek and lookup
//! - **Scanning Binary Heap**: the unindexed baseline with the same contract; O(n) decrease_key
//! - **Priority Queue**: enqueue/dequeue/peek naming over either heap
//! - **Benchmark harness**: randomized workloads with CSV and table reports
//!
//! Values are identity keys. Inserting a value that is already present fails
//! with [`HeapError::DuplicateValue`], and a decrease that would raise a
//! priority is ignored.
//!
//! # Example
//!
//! ```rust
//! use indexed_heaps::{BinaryHeap, Heap, HeapError};
//!
//! let mut heap: BinaryHeap<&str> = BinaryHeap::new();
//! heap.insert(10, "high").unwrap();
//! heap.insert(5, "medium").unwrap();
//! heap.insert(1, "low").unwrap();
//!
//! heap.decrease_key("high", 0).unwrap();
//! assert_eq!(heap.peek_min(), Ok((&0, &"high")));
//! assert_eq!(heap.insert(3, "low"), Err(HeapError::DuplicateValue));
//! ```

pub mod bench;
pub mod binary;
pub mod queue;
pub mod scan_binary;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use queue::PriorityQueue;
pub use traits::{Heap, HeapError};
