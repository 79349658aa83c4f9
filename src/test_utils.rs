use std::{fmt::Debug, ops::RangeInclusive};

use proptest::prelude::*;

use crate::IntervalMap;

const RANGE_MAX: usize = 20;

/// Generate arbitrary valid closed ranges with bounds from [0..[`RANGE_MAX`]).
///
/// A small value domain encourages multiple operations to act on the same
/// (and overlapping) intervals.
pub(crate) fn arbitrary_range() -> impl Strategy<Value = RangeInclusive<usize>> {
    (0..RANGE_MAX, 0..RANGE_MAX).prop_map(|(a, b)| a.min(b)..=a.max(b))
}

/// Generate arbitrary (potentially inverted!) ranges with bounds from
/// [0..[`RANGE_MAX`]).
pub(crate) fn arbitrary_any_range() -> impl Strategy<Value = RangeInclusive<usize>> {
    (0..RANGE_MAX, 0..RANGE_MAX).prop_map(|(start, end)| start..=end)
}

/// Assert the BST, AVL and interval tree properties of tree nodes, ensuring
/// the tree is well-formed.
pub(crate) fn validate_tree_structure<R, V>(t: &IntervalMap<R, V>)
where
    R: Ord + Debug,
    V: Debug,
{
    let root = match t.root() {
        Some(v) => v,
        None => {
            assert_eq!(t.len(), 0);
            assert!(t.is_empty());
            return;
        }
    };

    let mut n_nodes = 0;

    // Perform a pre-order traversal of the tree.
    let mut stack = vec![root];
    while let Some(n) = stack.pop() {
        n_nodes += 1;

        // Prepare to visit the children
        stack.extend(n.left().iter().chain(n.right().iter()));

        // Invariant 1: the left child always contains a value strictly
        // less than this node.
        assert!(n
            .left()
            .map(|v| v.interval() < n.interval())
            .unwrap_or(true));

        // Invariant 2: the right child always contains a value strictly
        // greater than this node.
        assert!(n
            .right()
            .map(|v| v.interval() > n.interval())
            .unwrap_or(true));

        // Invariant 3: the height of this node is always +1 of the
        // maximum child height, where an absent child has height 0.
        let left_height = n.left().map(|v| v.height()).unwrap_or_default();
        let right_height = n.right().map(|v| v.height()).unwrap_or_default();
        let want_height = left_height.max(right_height) + 1;

        assert_eq!(
            n.height(),
            want_height,
            "expect node with interval {:?} to have height {}, has {}",
            n.interval(),
            want_height,
            n.height(),
        );

        // Invariant 4: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot
        // exceed 1.
        let balance = (left_height as i64 - right_height as i64).abs();
        assert!(
            balance <= 1,
            "balance={balance}, node={n:?}, stack={stack:?}"
        );

        // Invariant 5: the subtree max of "n" must be equal to either the
        // largest of the two child subtree maxes, or its own upper bound.
        let child_max = n
            .left()
            .map(|v| v.subtree_max())
            .max(n.right().map(|v| v.subtree_max()));
        let want_max = child_max.max(Some(n.interval().end())).unwrap();
        assert_eq!(want_max, n.subtree_max());
    }

    // Invariant 6: the maintained length matches the number of nodes.
    assert_eq!(n_nodes, t.len());
}
