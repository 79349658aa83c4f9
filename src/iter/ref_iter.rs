use std::ops::RangeInclusive;

use crate::node::Node;

/// An in-order walk of a subtree, yielding every [`Node`] in ascending interval
/// order.
///
/// The stack never holds more than one node per tree level.
#[derive(Debug)]
pub(crate) struct RefIter<'a, R, V> {
    stack: Vec<&'a Node<R, V>>,
}

impl<'a, R, V> RefIter<'a, R, V> {
    pub(crate) fn new(root: Option<&'a Node<R, V>>) -> Self {
        let mut this = Self {
            stack: Vec::with_capacity(root.map(|v| v.height() as usize).unwrap_or_default()),
        };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<R, V>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, R, V> Iterator for RefIter<'a, R, V> {
    type Item = &'a Node<R, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v)
    }
}

/// An iterator of `(interval, value)` references in ascending interval order,
/// returned by [`IntervalMap::iter()`].
///
/// [`IntervalMap::iter()`]: crate::IntervalMap::iter
#[derive(Debug)]
pub struct Iter<'a, R, V> {
    inner: RefIter<'a, R, V>,
    remaining: usize,
}

impl<'a, R, V> Iter<'a, R, V> {
    pub(crate) fn new(root: Option<&'a Node<R, V>>, len: usize) -> Self {
        Self {
            inner: RefIter::new(root),
            remaining: len,
        }
    }
}

impl<'a, R, V> Iterator for Iter<'a, R, V> {
    type Item = (&'a RangeInclusive<R>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.inner.next()?;
        self.remaining -= 1;
        Some((v.interval().as_range(), v.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R, V> ExactSizeIterator for Iter<'_, R, V> {}
