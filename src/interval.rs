use std::{cmp::Ordering, ops::RangeInclusive};

use crate::Error;

/// A totally-ordered closed interval, convertible from and infallibly
/// comparable to a [`RangeInclusive`].
///
/// An [`Interval`] is ordered by the lower bound, and tie-broken with the upper
/// bound. Construction through [`TryFrom`] guarantees `start <= end`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct Interval<R>(RangeInclusive<R>);

impl<R> Interval<R> {
    pub(crate) fn start(&self) -> &R {
        self.0.start()
    }

    pub(crate) fn end(&self) -> &R {
        self.0.end()
    }

    pub(crate) fn as_range(&self) -> &RangeInclusive<R> {
        &self.0
    }

    pub(crate) fn into_range(self) -> RangeInclusive<R> {
        self.0
    }
}

impl<R> Interval<R>
where
    R: Ord,
{
    /// Returns true if `self` and `other` share at least one point.
    ///
    /// Both intervals are closed, so touching endpoints overlap.
    pub(crate) fn overlaps(&self, other: &RangeInclusive<R>) -> bool {
        self.start() <= other.end() && other.start() <= self.end()
    }

    /// Returns true if `point` lies within `[start, end]`.
    pub(crate) fn contains_point(&self, point: &R) -> bool {
        self.start() <= point && point <= self.end()
    }

    /// Extend the upper bound of `self` to cover `other`, keeping the lower
    /// bound of `self`.
    ///
    /// `other` must not start before `self`.
    pub(crate) fn merge(self, other: Self) -> Self {
        debug_assert!(self.start() <= other.start());

        let (start, end) = self.0.into_inner();
        let (_, other_end) = other.0.into_inner();
        Self(start..=end.max(other_end))
    }
}

/// Reject `range` if it does not describe a closed interval.
pub(crate) fn validate<R>(range: &RangeInclusive<R>) -> Result<(), Error>
where
    R: Ord,
{
    if range.start() > range.end() {
        log::trace!("rejecting inverted interval");
        return Err(Error::InvalidArgument);
    }
    Ok(())
}

impl<R> TryFrom<RangeInclusive<R>> for Interval<R>
where
    R: Ord,
{
    type Error = Error;

    fn try_from(value: RangeInclusive<R>) -> Result<Self, Self::Error> {
        validate(&value)?;

        // Rebuild the range so any iteration state carried by the caller's
        // value does not leak into equality checks.
        let (start, end) = value.into_inner();
        Ok(Self(start..=end))
    }
}

impl<R> PartialOrd for Interval<R>
where
    R: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R> Ord for Interval<R>
where
    R: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_range(&other.0)
    }
}

impl<R> Interval<R>
where
    R: Ord,
{
    /// Order `self` against a bare range.
    ///
    /// The lower bound is the primary ordering value, falling back to the
    /// upper bound when the lower bounds are equal.
    pub(crate) fn cmp_range(&self, other: &RangeInclusive<R>) -> Ordering {
        match self.start().cmp(other.start()) {
            Ordering::Equal => self.end().cmp(other.end()),
            v => v,
        }
    }
}

impl<R> PartialOrd<RangeInclusive<R>> for Interval<R>
where
    R: Ord,
{
    fn partial_cmp(&self, other: &RangeInclusive<R>) -> Option<Ordering> {
        Some(self.cmp_range(other))
    }
}

impl<R> PartialEq<RangeInclusive<R>> for Interval<R>
where
    R: PartialEq,
{
    fn eq(&self, other: &RangeInclusive<R>) -> bool {
        self.start() == other.start() && self.end() == other.end()
    }
}
