//! Bottom-up construction of a height-balanced tree from a batch of entries.

use crate::{
    interval::Interval,
    node::{Node, Subtree},
};

/// Sort `entries` by interval, collapsing identical intervals to the entry
/// that appears last in the input.
pub(crate) fn sort_unique<R, V>(mut entries: Vec<(Interval<R>, V)>) -> Vec<(Interval<R>, V)>
where
    R: Ord,
{
    // A stable sort keeps identical intervals in input order.
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    dedup_keep_last(&mut entries);
    entries
}

/// Sort `entries` and merge each run of equal-valued, touching or overlapping
/// intervals into a single interval spanning the run.
///
/// Only an entry and the retained entry immediately before it in sort order
/// are ever merged.
pub(crate) fn sort_coalesce<R, V>(mut entries: Vec<(Interval<R>, V)>) -> Vec<(Interval<R>, V)>
where
    R: Ord,
    V: Ord,
{
    // Equal intervals are tie-broken by value so equal-valued entries sit next
    // to each other.
    entries.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    let mut out: Vec<(Interval<R>, V)> = Vec::with_capacity(entries.len());
    for (interval, value) in entries {
        match out.pop() {
            Some((retained, v)) if v == value && interval.start() <= retained.end() => {
                out.push((retained.merge(interval), v));
            }
            Some(prev) => {
                out.push(prev);
                out.push((interval, value));
            }
            None => out.push((interval, value)),
        }
    }

    // Extending a run never moves it past the next entry, but it can make it
    // equal to a differently-valued interval that follows.
    dedup_keep_last(&mut out);
    out
}

/// Remove consecutive entries with identical intervals, retaining the value of
/// the last one.
fn dedup_keep_last<R, V>(entries: &mut Vec<(Interval<R>, V)>)
where
    R: Ord,
{
    entries.dedup_by(|next, retained| {
        if next.0 != retained.0 {
            return false;
        }
        std::mem::swap(next, retained);
        true
    });
}

/// Build a height-balanced subtree from `sorted`, which must be strictly
/// ascending by interval.
///
/// The middle entry of each range becomes the subtree root, so the resulting
/// height is `ceil(log2(n + 1))` and no rotations are needed.
pub(crate) fn build_balanced<R, V>(sorted: Vec<(Interval<R>, V)>) -> Subtree<R, V>
where
    R: Ord + Clone,
{
    debug_assert!(sorted.windows(2).all(|w| w[0].0 < w[1].0));

    let n = sorted.len();
    build_recurse(n, &mut sorted.into_iter())
}

/// Consume `n` entries from `entries` in order, returning the subtree built
/// over them.
fn build_recurse<R, V, I>(n: usize, entries: &mut I) -> Subtree<R, V>
where
    R: Ord + Clone,
    I: Iterator<Item = (Interval<R>, V)>,
{
    if n == 0 {
        return None;
    }

    let mid = n / 2;

    // The left half is consumed first, leaving the middle entry next in line.
    let left = build_recurse(mid, entries);
    let (interval, value) = entries.next()?;
    let right = build_recurse(n - mid - 1, entries);

    Some(Box::new(Node::with_children(interval, value, left, right)))
}
