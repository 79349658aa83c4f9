use std::fmt::{self, Display, Formatter};

/// Errors returned by fallible [`IntervalMap`] operations.
///
/// A "not found" result is never an error; lookups return [`None`], `false`
/// or an empty iterator instead.
///
/// [`IntervalMap`]: crate::IntervalMap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The range is not a valid closed interval: its start bound is greater
    /// than its end bound.
    InvalidArgument,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => {
                write!(f, "invalid interval: start bound exceeds end bound")
            }
        }
    }
}

impl std::error::Error for Error {}
