use std::ops::RangeInclusive;

use serde::{de::Error as _, ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};

use crate::IntervalMap;

/// Serialises as a sequence of `(interval, value)` tuples in ascending interval
/// order.
impl<R, V> Serialize for IntervalMap<R, V>
where
    R: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

/// Deserialises a sequence of `(interval, value)` tuples in any order, building
/// a balanced tree with [`IntervalMap::from_entries()`].
impl<'de, R, V> Deserialize<'de> for IntervalMap<R, V>
where
    R: Deserialize<'de> + Ord + Clone,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<(RangeInclusive<R>, V)>::deserialize(deserializer)?;
        log::debug!("deserialised {} interval map entries", entries.len());

        IntervalMap::from_entries(entries).map_err(D::Error::custom)
    }
}
