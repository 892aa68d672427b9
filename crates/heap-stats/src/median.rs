use std::cmp::Ordering;

use crate::compare::{self, Comparator};
use crate::heap::BinaryHeap;

/// Running median over a growing multiset of `f64`.
pub trait MedianTracker {
    /// Adds `item` and returns the median of everything added so far.
    fn add(&mut self, item: f64) -> f64;
    /// `None` until the first value has been added.
    fn median(&self) -> Option<f64>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/**
Two-heap median maintainer.

`lower` is a max-heap holding the smaller half and `upper` a min-heap holding
the larger half. After every `add`, every value in `lower` is <= every value in
`upper` and the heap sizes differ by at most one. Each `add` is O(log n).
*/
#[derive(Debug)]
pub struct RunningMedian {
    lower: BinaryHeap<f64, Comparator<f64>>,
    upper: BinaryHeap<f64, Comparator<f64>>,
}

impl Default for RunningMedian {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningMedian {
    pub fn new() -> Self {
        Self {
            lower: BinaryHeap::new(compare::descending),
            upper: BinaryHeap::new(compare::ascending),
        }
    }

    pub fn lower_len(&self) -> usize {
        self.lower.size()
    }

    pub fn upper_len(&self) -> usize {
        self.upper.size()
    }

    /// Routes with the same `total_cmp` order the heaps use, NaN included.
    fn route(&mut self, item: f64) {
        match self.lower.peek() {
            Some(top) if compare::ascending(&item, top) != Ordering::Less => {
                self.upper.insert(item)
            }
            _ => self.lower.insert(item),
        }
    }

    /**
    Moves one root from the larger heap to the smaller one when their sizes
    differ by two. A single route can only widen the gap by one, so one move
    is always enough.
    */
    fn rebalance(&mut self) {
        let Self { lower, upper } = self;
        let (bigger, smaller) = if lower.size() > upper.size() {
            (lower, upper)
        } else {
            (upper, lower)
        };
        if bigger.size() - smaller.size() > 1 {
            if let Some(moved) = bigger.extract_root() {
                tracing::trace!(moved, "Rebalanced the median heaps");
                smaller.insert(moved);
            }
        }
    }
}

impl MedianTracker for RunningMedian {
    fn add(&mut self, item: f64) -> f64 {
        self.route(item);
        // The median must be read after the rebalance, never before.
        self.rebalance();
        // Both heaps cannot be empty right after an insert.
        self.median().unwrap_or(item)
    }

    fn median(&self) -> Option<f64> {
        match self.lower.size().cmp(&self.upper.size()) {
            Ordering::Greater => self.lower.peek().copied(),
            Ordering::Less => self.upper.peek().copied(),
            Ordering::Equal => match (self.lower.peek(), self.upper.peek()) {
                (Some(low), Some(high)) => Some((low + high) / 2.0),
                _ => None,
            },
        }
    }

    fn len(&self) -> usize {
        self.lower.size() + self.upper.size()
    }
}

/**
Baseline median maintainer over a single sorted vector.

The insertion slot is found by binary search but the insert itself shifts the
tail, so `add` is O(n). Produces the same medians as [`RunningMedian`].
*/
#[derive(Debug, Default)]
pub struct SortedMedian {
    data: Vec<f64>,
}

impl SortedMedian {
    pub fn new() -> Self {
        Self { data: vec![] }
    }
}

impl MedianTracker for SortedMedian {
    fn add(&mut self, item: f64) -> f64 {
        let slot = self
            .data
            .partition_point(|held| held.total_cmp(&item) != Ordering::Greater);
        self.data.insert(slot, item);
        self.median().unwrap_or(item)
    }

    fn median(&self) -> Option<f64> {
        let len = self.data.len();
        if len == 0 {
            return None;
        }
        let mid = len / 2;
        if len % 2 == 1 {
            Some(self.data[mid])
        } else {
            Some((self.data[mid - 1] + self.data[mid]) / 2.0)
        }
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
