//! Binary-heap priority queue and the order statistics built on it: heap
//! sort, running minimum/maximum and a two-heap running median.
//!
//! All structures are single-threaded and own their storage. Wrap an
//! instance in a mutex if it must be shared.

mod macros;

pub mod compare;
pub mod extreme;
pub mod heap;
pub mod median;
pub mod sort;
pub mod tree;

pub use compare::{ascending, descending, Comparator};
pub use extreme::{ExtremeTracker, RunningExtreme, SortedExtreme};
pub use heap::BinaryHeap;
pub use median::{MedianTracker, RunningMedian, SortedMedian};
pub use sort::heap_sort;
