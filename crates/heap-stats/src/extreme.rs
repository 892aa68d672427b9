use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use crate::compare::{self, Comparator};
use crate::heap::BinaryHeap;

/// A running minimum or maximum over a stream of insertions and extractions.
///
/// Which extreme is tracked is decided by the comparator the tracker is built
/// with: whatever ranks `Ordering::Less` is reported first.
pub trait ExtremeTracker<T> {
    /// Adds `item` and returns the current extreme.
    fn add(&mut self, item: T) -> T;
    /// Removes and returns the current extreme, `None` when nothing is held.
    fn extract(&mut self) -> Option<T>;
    fn peek(&self) -> Option<&T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Heap-backed tracker: O(log n) `add` and `extract`, O(1) `peek`.
pub struct RunningExtreme<T, C> {
    heap: BinaryHeap<T, C>,
}

impl<T, C> RunningExtreme<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: C) -> Self {
        Self {
            heap: BinaryHeap::new(compare),
        }
    }
}

impl RunningExtreme<f64, Comparator<f64>> {
    pub fn minimum() -> Self {
        Self::new(compare::ascending)
    }

    pub fn maximum() -> Self {
        Self::new(compare::descending)
    }
}

impl<T, C> ExtremeTracker<T> for RunningExtreme<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    fn add(&mut self, item: T) -> T {
        // Sift-up only replaces the root when the new item strictly beats it.
        let extreme = match self.heap.peek() {
            Some(root) if (self.heap.comparator())(&item, root) != Ordering::Less => root.clone(),
            _ => item.clone(),
        };
        self.heap.insert(item);
        extreme
    }

    fn extract(&mut self) -> Option<T> {
        self.heap.extract_root()
    }

    fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    fn len(&self) -> usize {
        self.heap.size()
    }
}

impl<T: Debug, C> Debug for RunningExtreme<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunningExtreme").field("heap", &self.heap).finish()
    }
}

/**
Baseline tracker keeping every item in a vector sorted from the worst rank to
the best, so the extreme is always the last element.

`add` scans linearly for the insertion slot and shifts the tail, O(n) per call.
It reports the same extremes as [`RunningExtreme`] for the same operations.
*/
pub struct SortedExtreme<T, C> {
    data: Vec<T>,
    compare: C,
}

impl<T, C> SortedExtreme<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }
}

impl SortedExtreme<f64, Comparator<f64>> {
    pub fn minimum() -> Self {
        Self::new(compare::ascending)
    }

    pub fn maximum() -> Self {
        Self::new(compare::descending)
    }
}

impl<T, C> ExtremeTracker<T> for SortedExtreme<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    fn add(&mut self, item: T) -> T {
        let slot = self
            .data
            .iter()
            .position(|held| (self.compare)(&item, held) == Ordering::Greater)
            .unwrap_or(self.data.len());
        self.data.insert(slot, item);
        self.data[self.data.len() - 1].clone()
    }

    fn extract(&mut self) -> Option<T> {
        self.data.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: Debug, C> Debug for SortedExtreme<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortedExtreme").field("data", &self.data).finish()
    }
}
