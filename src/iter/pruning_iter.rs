use crate::node::Node;

pub(crate) trait PruningOracle<R, V> {
    /// Returns true when the subtree rooted at `subtree_root` may hold a match
    /// and should be descended into.
    fn visit_subtree(&self, subtree_root: &Node<R, V>) -> bool;

    /// Returns true when `n` and the right subtree rooted below it may hold a
    /// match and should be evaluated.
    fn visit_right(&self, n: &Node<R, V>) -> bool;

    /// Returns true if `n` satisfies the pruning logic and should be yielded to
    /// the caller.
    fn filter_yield(&self, n: &Node<R, V>) -> bool;
}

/// An [`Iterator`] that performs a depth-first, in-order walk of a subtree and
/// yields [`Node`] instances that match a pruning predicate.
#[derive(Debug)]
pub(crate) struct PruningIter<'a, R, V, T> {
    stack: Vec<&'a Node<R, V>>,
    pruner: T,
}

impl<'a, R, V, T> PruningIter<'a, R, V, T>
where
    T: PruningOracle<R, V>,
{
    pub(crate) fn new(root: Option<&'a Node<R, V>>, pruner: T) -> Self {
        let mut this = Self {
            stack: vec![],
            pruner,
        };

        // Descend down the left side of the tree, pushing all the internal
        // nodes onto the stack until the left-most leaf is reached.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<R, V>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            if !self.pruner.visit_subtree(v) {
                // Nothing in the subtree rooted at "v" can match.
                break;
            }

            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, R, V, T> Iterator for PruningIter<'a, R, V, T>
where
    T: PruningOracle<R, V>,
{
    type Item = &'a Node<R, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.stack.pop()?;

            if !self.pruner.visit_right(v) {
                // Prune this node and the right subtree from the search.
                //
                // Every node still on the stack is an ancestor that orders
                // after "v", so none of them can match either.
                self.stack.clear();
                return None;
            }

            // Push the right subtree to be visited next.
            if let Some(right) = v.right() {
                self.push_subtree(right);
            }

            // Yield this node if it satisfies the pruning predicate.
            if self.pruner.filter_yield(v) {
                return Some(v);
            }
        }
    }
}
