//! Stock comparators for `f64` streams.
//!
//! Both use `f64::total_cmp`, so NaN and signed zeros get a fixed place
//! instead of breaking the total order a heap relies on.

use std::cmp::Ordering;

/// Signature of the stock comparators, usable as a concrete comparator type.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// Smallest value first.
pub fn ascending(a: &f64, b: &f64) -> Ordering {
    a.total_cmp(b)
}

/// Largest value first.
pub fn descending(a: &f64, b: &f64) -> Ordering {
    b.total_cmp(a)
}
