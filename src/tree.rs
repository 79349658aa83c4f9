use std::ops::RangeInclusive;

use crate::{
    build::{build_balanced, sort_coalesce, sort_unique},
    entry::Entry,
    interval::{validate, Interval},
    iter::{Iter, OverlapsPruner, OwnedIter, PruningIter, StabPruner},
    node::{height, remove_recurse, Node, Subtree},
    Error,
};

/// An ordered map of closed intervals `[start, end]` to values of type `V`.
///
/// Keys are [`RangeInclusive`] values ordered by their start bound, tie-broken
/// by their end bound. A range whose start is greater than its end is not a
/// valid key, and is rejected with [`Error::InvalidArgument`] before the map is
/// touched.
///
/// ```
/// use closed_interval_map::IntervalMap;
///
/// let mut map = IntervalMap::default();
/// map.insert(10..=20, "a")?;
/// map.insert(25..=30, "b")?;
///
/// assert_eq!(map.get(&(10..=20))?, Some(&"a"));
/// assert!(map.has_overlap(&(20..=24))?);
/// assert_eq!(map.get_at(&27), Some(&"b"));
/// # Ok::<(), closed_interval_map::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct IntervalMap<R, V> {
    root: Subtree<R, V>,
    len: usize,
}

impl<R, V> Default for IntervalMap<R, V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<R, V> IntervalMap<R, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of intervals stored in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the tree, which is 0 for an empty map and
    /// `O(log n)` otherwise.
    pub fn height(&self) -> usize {
        height(self.root.as_deref()) as usize
    }

    /// Remove all intervals from the map.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Iterate over all `(interval, value)` tuples in ascending interval
    /// order.
    pub fn iter(&self) -> Iter<'_, R, V> {
        Iter::new(self.root(), self.len)
    }

    /// Call `f` with every `(interval, value)` tuple in ascending interval
    /// order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&RangeInclusive<R>, &V),
    {
        for (range, value) in self.iter() {
            f(range, value);
        }
    }

    /// Snapshot the contents of the map into a [`Vec`] in ascending interval
    /// order.
    pub fn to_vec(&self) -> Vec<(RangeInclusive<R>, V)>
    where
        R: Clone,
        V: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        self.for_each(|range, value| out.push((range.clone(), value.clone())));
        out
    }

    pub(crate) fn root(&self) -> Option<&Node<R, V>> {
        self.root.as_deref()
    }
}

impl<R, V> IntervalMap<R, V>
where
    R: Ord,
{
    /// Insert `value` under the closed interval `range`, returning the value
    /// it replaced if `range` was already present.
    ///
    /// Replacing a value does not change the tree structure.
    pub fn insert(&mut self, range: RangeInclusive<R>, value: V) -> Result<Option<V>, Error>
    where
        R: Clone,
    {
        let interval = Interval::try_from(range)?;
        Ok(self.insert_interval(interval, value))
    }

    pub(crate) fn insert_interval(&mut self, interval: Interval<R>, value: V) -> Option<V>
    where
        R: Clone,
    {
        let replaced = match self.root {
            Some(ref mut v) => v.insert(interval, value),
            None => {
                self.root = Some(Box::new(Node::new(interval, value)));
                None
            }
        };

        if replaced.is_none() {
            self.len += 1;
        }

        replaced
    }

    /// Return the value stored for exactly `range`, if any.
    pub fn get(&self, range: &RangeInclusive<R>) -> Result<Option<&V>, Error> {
        validate(range)?;
        Ok(self.lookup(range))
    }

    /// Return a mutable reference to the value stored for exactly `range`, if
    /// any.
    pub fn get_mut(&mut self, range: &RangeInclusive<R>) -> Result<Option<&mut V>, Error> {
        validate(range)?;
        Ok(self.lookup_mut(range))
    }

    pub(crate) fn lookup(&self, range: &RangeInclusive<R>) -> Option<&V> {
        self.root.as_ref().and_then(|v| v.get(range))
    }

    pub(crate) fn lookup_mut(&mut self, range: &RangeInclusive<R>) -> Option<&mut V> {
        self.root.as_mut().and_then(|v| v.get_mut(range))
    }

    pub fn contains_key(&self, range: &RangeInclusive<R>) -> Result<bool, Error> {
        Ok(self.get(range)?.is_some())
    }

    /// Remove `range` from the map, returning the value it held.
    ///
    /// Returns [`None`] and leaves the map unchanged if `range` is not
    /// present.
    pub fn remove(&mut self, range: &RangeInclusive<R>) -> Result<Option<V>, Error>
    where
        R: Clone,
    {
        validate(range)?;
        Ok(self.remove_valid(range))
    }

    pub(crate) fn remove_valid(&mut self, range: &RangeInclusive<R>) -> Option<V>
    where
        R: Clone,
    {
        let removed = remove_recurse(&mut self.root, range);
        if removed.is_some() {
            self.len -= 1;
        }

        removed
    }

    /// Get the [`Entry`] for `range` for in-place manipulation.
    ///
    /// ```
    /// use closed_interval_map::IntervalMap;
    ///
    /// let mut map: IntervalMap<u32, u32> = IntervalMap::default();
    ///
    /// *map.entry(2..=4)?.or_insert(0) += 1;
    /// *map.entry(2..=4)?.or_insert(0) += 1;
    ///
    /// assert_eq!(map.get(&(2..=4))?, Some(&2));
    /// # Ok::<(), closed_interval_map::Error>(())
    /// ```
    pub fn entry(&mut self, range: RangeInclusive<R>) -> Result<Entry<'_, R, V>, Error>
    where
        R: Clone,
    {
        let interval = Interval::try_from(range)?;
        Ok(Entry::new(interval, self))
    }

    /// Returns true if any stored interval shares at least one point with
    /// `range`.
    ///
    /// Intervals are closed, so `[1, 5]` and `[5, 9]` overlap.
    pub fn has_overlap(&self, range: &RangeInclusive<R>) -> Result<bool, Error> {
        validate(range)?;
        Ok(self
            .root
            .as_ref()
            .map(|v| v.has_overlap(range))
            .unwrap_or_default())
    }

    /// Iterate over every stored interval that overlaps `range`, in ascending
    /// interval order.
    pub fn overlapping<'a>(
        &'a self,
        range: &'a RangeInclusive<R>,
    ) -> Result<impl Iterator<Item = (&'a RangeInclusive<R>, &'a V)> + 'a, Error> {
        validate(range)?;
        Ok(PruningIter::new(self.root(), OverlapsPruner::new(range))
            .map(|v| (v.interval().as_range(), v.value())))
    }

    /// Return the value of a stored interval containing `point`.
    ///
    /// Returns [`None`] only when no stored interval contains `point`. When
    /// several do, which one is returned is unspecified; use
    /// [`IntervalMap::get_all_at()`] to visit all of them.
    pub fn get_at(&self, point: &R) -> Option<&V> {
        self.root.as_ref().and_then(|v| v.stab(point))
    }

    /// Iterate over every stored interval containing `point`, in ascending
    /// interval order.
    pub fn get_all_at<'a>(
        &'a self,
        point: &'a R,
    ) -> impl Iterator<Item = (&'a RangeInclusive<R>, &'a V)> + 'a {
        PruningIter::new(self.root(), StabPruner::new(point))
            .map(|v| (v.interval().as_range(), v.value()))
    }
}

impl<R, V> IntervalMap<R, V>
where
    R: Ord + Clone,
{
    /// Build a map from an unordered batch of `(interval, value)` tuples.
    ///
    /// Every interval is validated before anything is built. When the same
    /// interval appears more than once, the last value wins. The resulting tree
    /// is perfectly height-balanced.
    ///
    /// ```
    /// use closed_interval_map::IntervalMap;
    ///
    /// let map = IntervalMap::from_entries([(4..=8, 'b'), (0..=2, 'a'), (4..=8, 'c')])?;
    ///
    /// assert_eq!(map.to_vec(), [(0..=2, 'a'), (4..=8, 'c')]);
    /// # Ok::<(), closed_interval_map::Error>(())
    /// ```
    pub fn from_entries<I>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (RangeInclusive<R>, V)>,
    {
        let entries = collect_valid(entries)?;
        let n_in = entries.len();
        Ok(Self::from_sorted(sort_unique(entries), n_in))
    }

    /// Build a map from an unordered batch of `(interval, value)` tuples,
    /// merging touching or overlapping intervals that map to equal values.
    ///
    /// Entries are sorted by interval and then by value, and each entry is
    /// merged into the run retained immediately before it when their values
    /// are equal and the entry starts at or before the end of that run. If a
    /// merged run ends up with the same interval as a differently valued
    /// entry, only the one sorted last is kept and the points of the other
    /// map to its value.
    ///
    /// ```
    /// use closed_interval_map::IntervalMap;
    ///
    /// let map = IntervalMap::from_entries_coalesced([(0..=2, 'X'), (2..=5, 'X')])?;
    ///
    /// assert_eq!(map.to_vec(), [(0..=5, 'X')]);
    /// # Ok::<(), closed_interval_map::Error>(())
    /// ```
    pub fn from_entries_coalesced<I>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (RangeInclusive<R>, V)>,
        V: Ord,
    {
        let entries = collect_valid(entries)?;
        let n_in = entries.len();
        Ok(Self::from_sorted(sort_coalesce(entries), n_in))
    }

    fn from_sorted(sorted: Vec<(Interval<R>, V)>, n_in: usize) -> Self {
        let len = sorted.len();
        let this = Self {
            root: build_balanced(sorted),
            len,
        };

        log::debug!(
            "built interval map from {} entries: {} stored, height {}",
            n_in,
            len,
            this.height()
        );

        this
    }
}

fn collect_valid<R, V, I>(entries: I) -> Result<Vec<(Interval<R>, V)>, Error>
where
    R: Ord,
    I: IntoIterator<Item = (RangeInclusive<R>, V)>,
{
    entries
        .into_iter()
        .map(|(range, value)| Ok((Interval::try_from(range)?, value)))
        .collect()
}

impl<'a, R, V> IntoIterator for &'a IntervalMap<R, V> {
    type Item = (&'a RangeInclusive<R>, &'a V);
    type IntoIter = Iter<'a, R, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R, V> IntoIterator for IntervalMap<R, V> {
    type Item = (RangeInclusive<R>, V);
    type IntoIter = OwnedIter<R, V>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.root, self.len)
    }
}
