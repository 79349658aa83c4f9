use std::{cmp::Ordering, ops::RangeInclusive};

use crate::interval::Interval;

/// An owned, possibly empty, subtree.
pub(crate) type Subtree<R, V> = Option<Box<Node<R, V>>>;

#[derive(Debug, Clone)]
pub(crate) struct Node<R, V> {
    /// Child nodes pointers.
    left: Subtree<R, V>,
    right: Subtree<R, V>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, an absent child a height of 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    height: u8,

    /// The maximum upper bound of all intervals for the subtree rooted at this
    /// [`Node`].
    subtree_max: R,

    interval: Interval<R>,
    value: V,
}

impl<R, V> Node<R, V> {
    pub(crate) fn new(interval: Interval<R>, value: V) -> Self
    where
        R: Clone,
    {
        Self {
            subtree_max: interval.end().clone(),
            interval,
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Construct a [`Node`] over two already well-formed subtrees, computing
    /// the augmented height and subtree max from them.
    pub(crate) fn with_children(
        interval: Interval<R>,
        value: V,
        left: Option<Box<Self>>,
        right: Option<Box<Self>>,
    ) -> Self
    where
        R: Ord + Clone,
    {
        let mut n = Self::new(interval, value);
        n.left = left;
        n.right = right;
        update_augment(&mut n);
        n
    }

    /// Insert `value` under `interval` into the subtree rooted at `self`,
    /// returning the previous value if the interval was already present.
    pub(crate) fn insert(self: &mut Box<Self>, interval: Interval<R>, value: V) -> Option<V>
    where
        R: Ord + Clone,
    {
        let child = match interval.cmp(&self.interval) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                return Some(std::mem::replace(&mut self.value, value));
            }
            Ordering::Greater => &mut self.right,
        };

        let replaced = match child {
            Some(v) => v.insert(interval, value),
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(interval, value)));

                // A single new leaf below self changes the height difference
                // by at most 1 in its direction, which cannot unbalance self.
                //
                // Update this node and skip the rebalancing checks.
                update_augment(self);
                return None;
            }
        };

        if replaced.is_some() {
            // The tree structure has not been modified, so it does not require
            // rebalancing.
            return replaced;
        }

        rebalance(self);
        None
    }

    pub(crate) fn get(&self, range: &RangeInclusive<R>) -> Option<&V>
    where
        R: Ord,
    {
        let node = match self.interval.cmp_range(range) {
            Ordering::Greater => self.left(),
            Ordering::Equal => return Some(&self.value),
            Ordering::Less => self.right(),
        }?;

        // Prune this subtree from the search if the maximum upper bound in the
        // subtree is less than the search upper bound. If true, this subtree
        // cannot contain the search range.
        if node.subtree_max() < range.end() {
            return None;
        }

        node.get(range)
    }

    pub(crate) fn get_mut(&mut self, range: &RangeInclusive<R>) -> Option<&mut V>
    where
        R: Ord,
    {
        let node = match self.interval.cmp_range(range) {
            Ordering::Greater => self.left.as_deref_mut(),
            Ordering::Equal => return Some(&mut self.value),
            Ordering::Less => self.right.as_deref_mut(),
        }?;

        if node.subtree_max() < range.end() {
            return None;
        }

        node.get_mut(range)
    }

    /// Returns true if any interval in the subtree rooted at `self` overlaps
    /// `query`.
    ///
    /// Walks a single root-to-leaf path: the left subtree is only taken when
    /// it holds an interval ending at or after `query.start()`. If nothing
    /// there overlaps, every such interval starts after `query.end()`, and so
    /// does everything to the right of it.
    pub(crate) fn has_overlap(&self, query: &RangeInclusive<R>) -> bool
    where
        R: Ord,
    {
        let mut ptr = Some(self);

        while let Some(n) = ptr {
            if n.subtree_max() < query.start() {
                return false;
            }

            if n.interval.overlaps(query) {
                return true;
            }

            ptr = match n.left() {
                Some(l) if l.subtree_max() >= query.start() => Some(l),
                _ => n.right(),
            };
        }

        false
    }

    /// Return the value of one interval containing `point`, if any.
    ///
    /// Which interval is chosen when several contain `point` is unspecified.
    pub(crate) fn stab(&self, point: &R) -> Option<&V>
    where
        R: Ord,
    {
        let mut ptr = Some(self);

        while let Some(n) = ptr {
            if n.subtree_max() < point {
                return None;
            }

            if point < n.interval.start() {
                // Every interval to the right starts after the point.
                ptr = n.left();
                continue;
            }

            if point <= n.interval.end() {
                return Some(&n.value);
            }

            ptr = match n.left() {
                Some(l) if l.subtree_max() >= point => Some(l),
                _ => n.right(),
            };
        }

        None
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn interval(&self) -> &Interval<R> {
        &self.interval
    }

    pub(crate) fn subtree_max(&self) -> &R {
        &self.subtree_max
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the [`RangeInclusive`] and value `V` it
    /// contains.
    pub(crate) fn into_tuple(self) -> (RangeInclusive<R>, V) {
        (self.interval.into_range(), self.value)
    }
}

pub(crate) fn height<R, V>(n: Option<&Node<R, V>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

/// Recompute the height and subtree max of `n` from its (already correct)
/// children.
fn update_augment<R, V>(n: &mut Node<R, V>)
where
    R: Ord + Clone,
{
    n.height = 1 + height(n.left()).max(height(n.right()));

    let mut max = n.interval.end();
    for child in [n.left(), n.right()].into_iter().flatten() {
        max = std::cmp::max(max, child.subtree_max());
    }
    n.subtree_max = max.clone();
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<R, V>(n: &Node<R, V>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// A no-op if `x` has no right child.
fn rotate_left<R, V>(x: &mut Box<Node<R, V>>)
where
    R: Ord + Clone,
{
    let Some(mut p) = x.right.take() else {
        return;
    };
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_augment(&mut p);

    x.left = Some(p);
    update_augment(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// A no-op if `y` has no left child.
fn rotate_right<R, V>(y: &mut Box<Node<R, V>>)
where
    R: Ord + Clone,
{
    let Some(mut p) = y.left.take() else {
        return;
    };
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_augment(&mut p);

    y.right = Some(p);
    update_augment(y);
}

/// Re-augment `n` and restore the AVL balance of the subtree rooted at it
/// after a single-level change in one of its children.
fn rebalance<R, V>(n: &mut Box<Node<R, V>>)
where
    R: Ord + Clone,
{
    update_augment(n);

    match balance(n) {
        // Left-heavy
        2.. => {
            if let Some(l) = n.left.as_mut() {
                if balance(l) < 0 {
                    // Left-right
                    rotate_left(l);
                }
            }
            rotate_right(n);
        }
        // Right-heavy
        ..=-2 => {
            if let Some(r) = n.right.as_mut() {
                if balance(r) > 0 {
                    // Right-left
                    rotate_right(r);
                }
            }
            rotate_left(n);
        }
        _ => { /* balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(n).abs() <= 1);
}

/// Detach the minimum node of the subtree rooted at `root`.
///
/// Returns the detached node (with no children) and what remains of the
/// subtree, rebalanced along the left edge.
fn take_min<R, V>(mut root: Box<Node<R, V>>) -> (Box<Node<R, V>>, Subtree<R, V>)
where
    R: Ord + Clone,
{
    match root.left.take() {
        Some(left) => {
            let (min, rest) = take_min(left);
            root.left = rest;
            rebalance(&mut root);
            (min, Some(root))
        }
        None => {
            // The left-most node. Its right subtree (if any) takes its place.
            let rest = root.right.take();
            (root, rest)
        }
    }
}

/// Remove `range` from the subtree held in `slot`, returning the value it
/// mapped to.
///
/// Returns [`None`] and leaves the subtree untouched if `range` is not found.
/// Otherwise every node on the path to the removed key is re-augmented and
/// rebalanced on the way back up.
pub(crate) fn remove_recurse<R, V>(
    slot: &mut Subtree<R, V>,
    range: &RangeInclusive<R>,
) -> Option<V>
where
    R: Ord + Clone,
{
    let node = slot.as_mut()?;

    // Prune this subtree from the search if the maximum upper bound in the
    // subtree is less than the search upper bound. If true, this subtree
    // cannot contain the search range.
    if node.subtree_max() < range.end() {
        return None;
    }

    match node.interval.cmp_range(range) {
        Ordering::Greater => {
            let v = remove_recurse(&mut node.left, range)?;
            rebalance(node);
            return Some(v);
        }
        Ordering::Less => {
            let v = remove_recurse(&mut node.right, range)?;
            rebalance(node);
            return Some(v);
        }
        Ordering::Equal => { /* This node holds the key to be removed */ }
    }

    let mut node = slot.take()?;
    debug_assert!(node.interval == *range);

    let value = match (node.left.take(), node.right.take()) {
        (Some(left), Some(right)) => {
            // Two children: the in-order successor (the minimum of the right
            // subtree) moves its payload into this node, and its own slot is
            // unlinked from the right subtree.
            let (successor, rest) = take_min(right);
            debug_assert!(successor.left.is_none());
            debug_assert!(successor.right.is_none());

            let Node {
                interval, value, ..
            } = *successor;

            node.left = Some(left);
            node.right = rest;
            node.interval = interval;
            let old = std::mem::replace(&mut node.value, value);

            rebalance(&mut node);
            *slot = Some(node);
            old
        }
        (left, right) => {
            // Zero or one child: splice the child (if any) into this slot.
            *slot = left.or(right);
            let Node { value, .. } = *node;
            value
        }
    };

    Some(value)
}
