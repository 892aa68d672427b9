//! Index arithmetic and sizing for complete binary trees stored in an array.

#[inline]
pub fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub fn right(index: usize) -> usize {
    2 * index + 2
}

/// Parent of a non-root index.
#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

/// Number of nodes in a full tree of the given height, `2^height - 1`.
/// Saturates at `usize::MAX`.
pub fn max_items(height: u32) -> usize {
    1usize.checked_shl(height).map_or(usize::MAX, |capacity| capacity - 1)
}

/// Smallest height able to hold `items` nodes, `ceil(log2(items + 1))`.
pub fn min_height(items: usize) -> u32 {
    // ceil(log2(n + 1)) == number of bits needed to write n
    usize::BITS - items.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_and_parent_indices() {
        assert_eq!(left(0), 1);
        assert_eq!(right(0), 2);
        assert_eq!(left(3), 7);
        assert_eq!(right(3), 8);
        for i in 1..100 {
            let p = parent(i);
            assert!(left(p) == i || right(p) == i);
        }
    }

    #[test]
    fn test_max_items() {
        assert_eq!(max_items(0), 0);
        assert_eq!(max_items(1), 1);
        assert_eq!(max_items(3), 7);
        assert_eq!(max_items(10), 1023);
        assert_eq!(max_items(usize::BITS), usize::MAX);
        assert_eq!(max_items(200), usize::MAX);
    }

    #[test]
    fn test_min_height() {
        assert_eq!(min_height(0), 0);
        assert_eq!(min_height(1), 1);
        assert_eq!(min_height(3), 2);
        assert_eq!(min_height(4), 3);
        assert_eq!(min_height(7), 3);
        assert_eq!(min_height(1023), 10);
        assert_eq!(min_height(1024), 11);
    }

    #[test]
    fn test_full_trees_fit_their_height() {
        for height in 0..20 {
            assert_eq!(min_height(max_items(height)), height);
        }
    }
}
