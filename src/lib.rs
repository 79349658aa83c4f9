//! An ordered map keyed by closed intervals `[start, end]`, backed by an AVL
//! tree augmented with the maximum upper bound of each subtree.
//!
//! The augmentation allows whole subtrees to be skipped when searching for
//! intervals that overlap a range or contain a point:
//!
//! * [`IntervalMap::get()`] / [`IntervalMap::remove()`]: exact interval
//!   lookup, `O(log n)`.
//! * [`IntervalMap::has_overlap()`]: overlap existence, `O(log n)`.
//! * [`IntervalMap::overlapping()`]: all overlapping intervals,
//!   `O(log n + k)`.
//! * [`IntervalMap::get_at()`] / [`IntervalMap::get_all_at()`]: point
//!   stabbing queries.
//! * [`IntervalMap::from_entries()`] /
//!   [`IntervalMap::from_entries_coalesced()`]: bulk construction of a
//!   perfectly balanced tree from unsorted input.
//!
//! All intervals are closed: `[1, 5]` and `[5, 9]` overlap at `5`.
//!
//! ```
//! use closed_interval_map::IntervalMap;
//!
//! let mut map = IntervalMap::default();
//! map.insert(1..=5, "a")?;
//! map.insert(5..=9, "b")?;
//! map.insert(12..=14, "c")?;
//!
//! let got = map
//!     .overlapping(&(4..=6))?
//!     .map(|(_, v)| *v)
//!     .collect::<Vec<_>>();
//! assert_eq!(got, ["a", "b"]);
//!
//! assert_eq!(map.get_at(&13), Some(&"c"));
//! assert_eq!(map.get_at(&10), None);
//! # Ok::<(), closed_interval_map::Error>(())
//! ```

mod build;
mod entry;
mod error;
mod interval;
mod iter;
mod node;
#[cfg(feature = "serde")]
mod serde_impl;
mod tree;

#[cfg(test)]
mod test_utils;

pub use entry::*;
pub use error::*;
pub use iter::{Iter, OwnedIter};
pub use tree::*;
