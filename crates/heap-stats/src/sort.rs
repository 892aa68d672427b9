use std::cmp::Ordering;

use crate::heap::BinaryHeap;

/**
Sorts `items` by pushing all of them through a fresh [`BinaryHeap`] and
draining it. O(n log n) time, O(n) extra space; the input is not touched in
place. Elements the comparator ranks `Less` come first.
*/
pub fn heap_sort<T, C, I>(items: I, compare: C) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    C: Fn(&T, &T) -> Ordering,
{
    let items = items.into_iter();
    let mut heap = BinaryHeap::with_capacity(items.size_hint().0, compare);
    heap.extend(items);
    let mut sorted = Vec::with_capacity(heap.size());
    while let Some(root) = heap.extract_root() {
        sorted.push(root);
    }
    sorted
}
