use std::ops::RangeInclusive;

use crate::node::Node;

use super::pruning_iter::PruningOracle;

/// Yields every interval that shares at least one point with `query`.
#[derive(Debug)]
pub(crate) struct OverlapsPruner<'a, R> {
    query: &'a RangeInclusive<R>,
}

impl<'a, R> OverlapsPruner<'a, R> {
    pub(crate) fn new(query: &'a RangeInclusive<R>) -> Self {
        Self { query }
    }
}

impl<R, V> PruningOracle<R, V> for OverlapsPruner<'_, R>
where
    R: Ord,
{
    fn visit_subtree(&self, subtree_root: &Node<R, V>) -> bool {
        subtree_root.subtree_max() >= self.query.start()
    }

    fn visit_right(&self, n: &Node<R, V>) -> bool {
        n.interval().start() <= self.query.end()
    }

    fn filter_yield(&self, n: &Node<R, V>) -> bool {
        n.interval().overlaps(self.query)
    }
}

/// Yields every interval containing `point`.
#[derive(Debug)]
pub(crate) struct StabPruner<'a, R> {
    point: &'a R,
}

impl<'a, R> StabPruner<'a, R> {
    pub(crate) fn new(point: &'a R) -> Self {
        Self { point }
    }
}

impl<R, V> PruningOracle<R, V> for StabPruner<'_, R>
where
    R: Ord,
{
    fn visit_subtree(&self, subtree_root: &Node<R, V>) -> bool {
        subtree_root.subtree_max() >= self.point
    }

    fn visit_right(&self, n: &Node<R, V>) -> bool {
        n.interval().start() <= self.point
    }

    fn filter_yield(&self, n: &Node<R, V>) -> bool {
        n.interval().contains_point(self.point)
    }
}
