use std::ops::RangeInclusive;

use crate::{interval::Interval, IntervalMap};

/// The slot for one exact closed interval key in an [`IntervalMap`], obtained
/// from [`IntervalMap::entry()`].
///
/// Only a stored interval with the same start and end bound makes the entry
/// [`Entry::Occupied`]. A stored interval that merely overlaps or touches the
/// key (`[0, 5]` for the key `[5, 9]`) leaves it [`Entry::Vacant`].
#[derive(Debug)]
pub enum Entry<'a, R, V>
where
    R: Ord + Clone,
{
    Vacant(VacantEntry<'a, R, V>),
    Occupied(OccupiedEntry<'a, R, V>),
}

/// An [`Entry`] for an interval not stored in the map.
#[derive(Debug)]
pub struct VacantEntry<'a, R, V>
where
    R: Ord + Clone,
{
    key: Interval<R>,
    map: &'a mut IntervalMap<R, V>,
}

/// An [`Entry`] for an interval stored in the map.
#[derive(Debug)]
pub struct OccupiedEntry<'a, R, V>
where
    R: Ord + Clone,
{
    key: Interval<R>,
    map: &'a mut IntervalMap<R, V>,
}

impl<'a, R, V> Entry<'a, R, V>
where
    R: Ord + Clone,
{
    /// Classify the already validated `key` against the contents of `map`.
    pub(crate) fn new(key: Interval<R>, map: &'a mut IntervalMap<R, V>) -> Self {
        match map.lookup(key.as_range()) {
            Some(_) => Self::Occupied(OccupiedEntry { key, map }),
            None => Self::Vacant(VacantEntry { key, map }),
        }
    }

    /// The closed interval this entry is keyed by.
    pub fn key(&self) -> &RangeInclusive<R> {
        match self {
            Self::Vacant(v) => v.key(),
            Self::Occupied(v) => v.key(),
        }
    }

    /// Return the stored value, storing `default` first if the interval is
    /// vacant.
    ///
    /// ```
    /// use closed_interval_map::IntervalMap;
    ///
    /// let mut map: IntervalMap<u32, u32> = IntervalMap::default();
    /// map.insert(0..=10, 1)?;
    ///
    /// // [0, 9] overlaps [0, 10] but is a distinct key.
    /// *map.entry(0..=9)?.or_insert(40) += 2;
    ///
    /// assert_eq!(map.get(&(0..=9))?, Some(&42));
    /// assert_eq!(map.get(&(0..=10))?, Some(&1));
    /// # Ok::<(), closed_interval_map::Error>(())
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        self.or_insert_with(|| default)
    }

    /// As [`Entry::or_insert()`], calling `default` only when vacant.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        self.or_insert_with_key(|_| default())
    }

    /// As [`Entry::or_insert()`], deriving the value from the interval only
    /// when vacant.
    ///
    /// ```
    /// use closed_interval_map::IntervalMap;
    ///
    /// let mut map: IntervalMap<i32, i32> = IntervalMap::default();
    ///
    /// // Width of the closed interval, counting both bounds.
    /// map.entry(3..=7)?.or_insert_with_key(|r| r.end() - r.start() + 1);
    ///
    /// assert_eq!(map.get_at(&5), Some(&5));
    /// # Ok::<(), closed_interval_map::Error>(())
    /// ```
    pub fn or_insert_with_key<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce(&RangeInclusive<R>) -> V,
    {
        match self {
            Self::Occupied(v) => v.into_mut(),
            Self::Vacant(v) => {
                let value = default(v.key());
                v.insert(value)
            }
        }
    }

    /// Apply `f` to the stored value when occupied.
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Self::Occupied(v) = &mut self {
            f(v.get_mut());
        }
        self
    }
}

impl<'a, R, V> Entry<'a, R, V>
where
    R: Ord + Clone,
    V: Default,
{
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(V::default)
    }
}

impl<'a, R, V> VacantEntry<'a, R, V>
where
    R: Ord + Clone,
{
    pub fn key(&self) -> &RangeInclusive<R> {
        self.key.as_range()
    }

    pub fn into_key(self) -> RangeInclusive<R> {
        self.key.into_range()
    }

    /// Store `value` under this interval, rebalancing the tree.
    pub fn insert(self, value: V) -> &'a mut V {
        let replaced = self.map.insert_interval(self.key.clone(), value);
        debug_assert!(replaced.is_none());

        self.map
            .lookup_mut(self.key.as_range())
            .expect("inserted interval must be present")
    }
}

impl<'a, R, V> OccupiedEntry<'a, R, V>
where
    R: Ord + Clone,
{
    pub fn key(&self) -> &RangeInclusive<R> {
        self.key.as_range()
    }

    pub fn get(&self) -> &V {
        self.map
            .lookup(self.key.as_range())
            .expect("occupied interval must be present")
    }

    pub fn get_mut(&mut self) -> &mut V {
        self.map
            .lookup_mut(self.key.as_range())
            .expect("occupied interval must be present")
    }

    pub fn into_mut(self) -> &'a mut V {
        self.map
            .lookup_mut(self.key.as_range())
            .expect("occupied interval must be present")
    }

    /// Replace the stored value in place, returning the old one. The tree
    /// structure is unchanged.
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }

    /// Remove the interval from the map, returning its value.
    pub fn remove(self) -> V {
        self.map
            .remove_valid(self.key.as_range())
            .expect("occupied interval must be present")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::validate_tree_structure;

    fn is_vacant<R: Ord + Clone, V>(e: &Entry<'_, R, V>) -> bool {
        matches!(e, Entry::Vacant(_))
    }

    #[test]
    fn test_overlapping_keys_are_vacant() {
        let mut map = IntervalMap::new();
        map.insert(5..=9, 'a').unwrap();

        // Touching at either bound, containing, contained, and sharing a start
        // bound are all distinct keys.
        for range in [0..=5, 9..=12, 0..=20, 6..=8, 5..=8, 5..=10, 4..=9] {
            let e = map.entry(range.clone()).unwrap();
            assert!(is_vacant(&e), "{range:?}");
        }

        assert!(!is_vacant(&map.entry(5..=9).unwrap()));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_point_key() {
        let mut map = IntervalMap::new();
        map.insert(0..=3, 1).unwrap();

        *map.entry(7..=7).unwrap().or_insert(0) += 10;

        assert_eq!(map.get_at(&7), Some(&10));
        assert_eq!(map.get_at(&6), None);
        assert_eq!(map.get_at(&8), None);
        assert!(map.has_overlap(&(7..=100)).unwrap());
        validate_tree_structure(&map);
    }

    #[test]
    fn test_or_insert_keeps_existing() {
        let mut map: IntervalMap<i32, String> = IntervalMap::default();

        map.entry(-4..=4)
            .unwrap()
            .or_insert_with(|| "first".to_string());
        map.entry(-4..=4)
            .unwrap()
            .or_insert_with(|| unreachable!("occupied"));

        assert_eq!(map.get(&(-4..=4)).unwrap().unwrap(), "first");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_and_modify() {
        let mut map: IntervalMap<u32, u32> = IntervalMap::default();

        map.entry(1..=2).unwrap().and_modify(|v| *v += 1).or_insert(1);
        map.entry(1..=2).unwrap().and_modify(|v| *v += 1).or_insert(1);
        map.entry(1..=3).unwrap().and_modify(|v| *v += 1).or_default();

        assert_eq!(map.to_vec(), [(1..=2, 2), (1..=3, 0)]);
    }

    #[test]
    fn test_rejects_inverted() {
        let mut map: IntervalMap<i32, u32> = IntervalMap::default();

        #[allow(clippy::reversed_empty_ranges)]
        let got = map.entry(10..=0);
        assert!(got.is_err());
        assert!(map.is_empty());
    }

    #[test]
    fn test_vacant_into_key() {
        let mut map: IntervalMap<i32, i32> = IntervalMap::default();
        map.insert(0..=10, 1).unwrap();

        match map.entry(0..=11).unwrap() {
            Entry::Vacant(v) => assert_eq!(v.into_key(), 0..=11),
            Entry::Occupied(_) => panic!("0..=11 is not stored"),
        }
    }

    #[test]
    fn test_occupied_insert_and_remove() {
        let mut map: IntervalMap<i32, i32> = IntervalMap::default();
        for v in 0..16 {
            map.insert(v..=v + 2, v).unwrap();
        }
        let height = map.height();

        match map.entry(4..=6).unwrap() {
            Entry::Occupied(mut e) => {
                assert_eq!(e.insert(40), 4);
                assert_eq!(e.get(), &40);
            }
            Entry::Vacant(_) => panic!("4..=6 is stored"),
        }
        assert_eq!(map.height(), height);

        match map.entry(4..=6).unwrap() {
            Entry::Occupied(e) => assert_eq!(e.remove(), 40),
            Entry::Vacant(_) => panic!("4..=6 is stored"),
        }

        assert_eq!(map.get_all_at(&5).count(), 2);
        assert_eq!(map.len(), 15);
        validate_tree_structure(&map);
    }
}
