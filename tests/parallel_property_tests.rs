//! Parallel property-based tests comparing heap implementations
//!
//! The same random operation stream is applied to the indexed heap, the
//! scanning heap and a `BTreeMap` model:
//!
//! 1. **Same results**: after every operation, both heaps return the same
//!    result and length, and the model agrees on priorities
//! 2. **Same drain**: at the end, both heaps drain to identical sequences
//!
//! The two heaps share their sift rules, so they agree even on the order of
//! equal priorities. The model only knows priorities, so it is compared on
//! those alone.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use indexed_heaps::scan_binary::ScanBinaryHeap;
use indexed_heaps::{BinaryHeap, Heap};

use std::collections::{BTreeMap, HashMap};

/// Multiset of priorities plus value -> priority map
#[derive(Default)]
struct Model {
    by_priority: BTreeMap<u32, usize>,
    by_value: HashMap<i32, u32>,
}

impl Model {
    fn insert(&mut self, priority: u32, value: i32) -> bool {
        if self.by_value.contains_key(&value) {
            return false;
        }
        self.by_value.insert(value, priority);
        *self.by_priority.entry(priority).or_insert(0) += 1;
        true
    }

    fn min(&self) -> Option<u32> {
        self.by_priority.keys().next().copied()
    }

    fn remove(&mut self, value: i32) {
        if let Some(priority) = self.by_value.remove(&value) {
            self.drop_priority(priority);
        }
    }

    fn decrease(&mut self, value: i32, priority: u32) -> bool {
        match self.by_value.get(&value).copied() {
            Some(current) => {
                if priority < current {
                    self.drop_priority(current);
                    *self.by_priority.entry(priority).or_insert(0) += 1;
                    self.by_value.insert(value, priority);
                }
                true
            }
            None => false,
        }
    }

    fn drop_priority(&mut self, priority: u32) {
        if let Some(count) = self.by_priority.get_mut(&priority) {
            *count -= 1;
            if *count == 0 {
                self.by_priority.remove(&priority);
            }
        }
    }
}

fn test_all_heaps_identical_behavior(
    initial: Vec<u32>,
    ops: Vec<(u8, i32, u32)>,
) -> Result<(), TestCaseError> {
    let mut indexed = BinaryHeap::<i32, u32>::new();
    let mut scan = ScanBinaryHeap::<i32, u32>::new();
    let mut model = Model::default();

    for (value, &priority) in initial.iter().enumerate() {
        let value = value as i32;
        prop_assert_eq!(indexed.insert(priority, value), scan.insert(priority, value));
        model.insert(priority, value);
    }

    for (op, value, priority) in ops {
        match op % 3 {
            0 => {
                let expected_ok = model.insert(priority, value);
                let a = indexed.insert(priority, value);
                let b = scan.insert(priority, value);
                prop_assert_eq!(a, b);
                prop_assert_eq!(a.is_ok(), expected_ok);
            }
            1 => {
                let a = indexed.extract_min();
                let b = scan.extract_min();
                prop_assert_eq!(&a, &b);
                match a {
                    Ok((p, v)) => {
                        prop_assert_eq!(Some(p), model.min());
                        model.remove(v);
                    }
                    Err(_) => prop_assert_eq!(model.min(), None),
                }
            }
            _ => {
                let expected_ok = model.decrease(value, priority);
                let a = indexed.decrease_key(&value, priority);
                let b = scan.decrease_key(&value, priority);
                prop_assert_eq!(a, b);
                prop_assert_eq!(a.is_ok(), expected_ok);
            }
        }

        prop_assert_eq!(indexed.len(), scan.len());
        prop_assert_eq!(indexed.peek_min(), scan.peek_min());
        prop_assert_eq!(indexed.peek_min().ok().map(|(p, _)| *p), model.min());
        prop_assert!(indexed.verify_invariants());
    }

    let mut drained_indexed = Vec::new();
    while let Ok(entry) = indexed.extract_min() {
        drained_indexed.push(entry);
    }
    let mut drained_scan = Vec::new();
    while let Ok(entry) = scan.extract_min() {
        drained_scan.push(entry);
    }
    prop_assert_eq!(drained_indexed, drained_scan);

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_parallel_heaps(
        initial in prop::collection::vec(0u32..100, 0..50),
        ops in prop::collection::vec((0u8..3, 0i32..80, 0u32..100), 0..200)
    ) {
        test_all_heaps_identical_behavior(initial, ops)?;
    }
}
