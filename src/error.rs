//! Error type shared by every path query.

use std::fmt;

/// Errors that can occur while resolving windows, building paths or classifying them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The requested window is not a sub-range of the network's observed timestamps.
    InvalidWindow {
        /// The requested `[start, end]` range, rendered for display.
        requested: String,
        /// The observed `[min, max]` range, rendered for display.
        observed: String,
    },
    /// The network has no snapshots, so no window can be resolved.
    NoSnapshots,
    /// Classification was requested on an empty path set.
    EmptyInput,
    /// A path was built from zero interactions.
    EmptyPath,
    /// The interaction at `position` does not start where the previous one ended.
    BrokenChain {
        /// Index of the offending interaction.
        position: usize,
    },
    /// The interaction at `position` happens before the previous one.
    TimeReversal {
        /// Index of the offending interaction.
        position: usize,
    },
    /// A worker thread of the all-pairs driver panicked.
    WorkerPanicked,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidWindow {
                requested,
                observed,
            } => {
                write!(
                    f,
                    "the interval {requested} is not a proper subset of the network timestamps {observed}"
                )
            }
            PathError::NoSnapshots => write!(f, "the network has no snapshots"),
            PathError::EmptyInput => write!(f, "cannot annotate an empty path set"),
            PathError::EmptyPath => write!(f, "a path needs at least one interaction"),
            PathError::BrokenChain { position } => {
                write!(
                    f,
                    "interaction {position} does not start at the node the previous one reached"
                )
            }
            PathError::TimeReversal { position } => {
                write!(f, "interaction {position} happens before the previous one")
            }
            PathError::WorkerPanicked => write!(f, "an all-pairs worker thread panicked"),
        }
    }
}

impl std::error::Error for PathError {}

impl PathError {
    pub(crate) fn invalid_window<T: fmt::Debug>(start: T, end: T, min: T, max: T) -> Self {
        PathError::InvalidWindow {
            requested: format!("[{start:?}, {end:?}]"),
            observed: format!("[{min:?}, {max:?}]"),
        }
    }
}
