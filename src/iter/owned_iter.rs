use std::ops::RangeInclusive;

use crate::node::{Node, Subtree};

/// An iterator of owned `(interval, value)` tuples in ascending interval
/// order, returned by the [`IntervalMap`] `into_iter()` impl.
///
/// [`IntervalMap`]: crate::IntervalMap
#[derive(Debug)]
pub struct OwnedIter<R, V> {
    stack: Vec<Box<Node<R, V>>>,
    remaining: usize,
}

impl<R, V> OwnedIter<R, V> {
    pub(crate) fn new(root: Subtree<R, V>, len: usize) -> Self {
        let mut this = Self {
            stack: vec![],
            remaining: len,
        };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: Box<Node<R, V>>) {
        let mut ptr = Some(subtree_root);

        while let Some(mut v) = ptr {
            ptr = v.take_left();
            self.stack.push(v);
        }
    }
}

impl<R, V> Iterator for OwnedIter<R, V> {
    type Item = (RangeInclusive<R>, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.take_right() {
            self.push_subtree(right);
        }

        self.remaining -= 1;
        Some(v.into_tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R, V> ExactSizeIterator for OwnedIter<R, V> {}
