use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};

use crate::tree;

/// Array-backed binary heap ordered by a caller-supplied comparator.
///
/// The root sits at index 0 and the children of `i` at `2i + 1` and `2i + 2`.
/// Whatever the comparator ranks `Ordering::Less` comes out first, so
/// `|a, b| a.cmp(b)` gives a min-heap and `|a, b| b.cmp(a)` a max-heap.
///
/// The comparator must be a deterministic total order. A comparator that is
/// not transitive leaves the heap in an unspecified (but memory safe) order.
pub struct BinaryHeap<T, C> {
    data: Vec<T>,
    compare: C,
}

impl<T, C> BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    pub fn with_capacity(capacity: usize, compare: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            compare,
        }
    }

    /**
    Appends the element to the next free slot and sifts it up until its parent
    no longer ranks after it. O(log n).
    */
    pub fn insert(&mut self, element: T) {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    /**
    Removes the root and returns it, or `None` when the heap is empty.
    The last element takes the root slot and is sifted down. O(log n).
    */
    pub fn extract_root(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        // swap_remove moves the last element into slot 0 in O(1)
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Height of the complete tree currently stored, 0 for an empty heap.
    pub fn height(&self) -> u32 {
        tree::min_height(self.data.len())
    }

    /// The backing array in tree order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Drains the heap in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(root) = self.extract_root() {
            sorted.push(root);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = tree::parent(index);
            if (self.compare)(&self.data[parent], &self.data[index]) != Ordering::Greater {
                break;
            }
            self.data.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = tree::left(index);
            if left >= len {
                break;
            }
            let right = tree::right(index);
            // On a tie between the children the left one wins.
            let preferred = if right < len
                && (self.compare)(&self.data[right], &self.data[left]) == Ordering::Less
            {
                right
            } else {
                left
            };
            if (self.compare)(&self.data[index], &self.data[preferred]) != Ordering::Greater {
                break;
            }
            self.data.swap(index, preferred);
            index = preferred;
        }
    }
}

impl<T, C> Extend<T> for BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for element in iter {
            self.insert(element);
        }
    }
}

/// Iterator returned by [`BinaryHeap::into_iter`], yielding roots until empty.
pub struct IntoIterSorted<T, C> {
    heap: BinaryHeap<T, C>,
}

impl<T, C> Iterator for IntoIterSorted<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_root()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.size(), Some(self.heap.size()))
    }
}

impl<T, C> ExactSizeIterator for IntoIterSorted<T, C> where C: Fn(&T, &T) -> Ordering {}

impl<T, C> IntoIterator for BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;
    type IntoIter = IntoIterSorted<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIterSorted { heap: self }
    }
}

impl<T: Debug, C> Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryHeap").field("data", &self.data).finish()
    }
}

#[cfg(test)]
pub(crate) fn holds_heap_property<T, C>(heap: &BinaryHeap<T, C>) -> bool
where
    C: Fn(&T, &T) -> Ordering,
{
    let data = heap.as_slice();
    (1..data.len()).all(|i| (heap.compare)(&data[tree::parent(i)], &data[i]) != Ordering::Greater)
}
