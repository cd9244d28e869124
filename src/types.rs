//! Node, timestamp and interaction types.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a network node.
///
/// Any cloneable, hashable, totally ordered type qualifies. The ordering only
/// makes the all-pairs output deterministic; it carries no meaning.
pub trait NodeId: Clone + Eq + Ord + Hash + Debug {}

impl<N: Clone + Eq + Ord + Hash + Debug> NodeId for N {}

/// A totally ordered snapshot identifier.
pub trait Timestamp: Copy + Ord + Hash + Debug {
    /// The difference between two timestamps.
    type Span: Copy + Ord + Debug;

    /// Returns the span from `earlier` to `self`.
    ///
    /// `earlier` must not be after `self`.
    fn span_since(self, earlier: Self) -> Self::Span;
}

macro_rules! unsigned_timestamp {
    ($($int:ty),* $(,)?) => {
        $(
            impl Timestamp for $int {
                type Span = $int;

                fn span_since(self, earlier: Self) -> Self::Span {
                    self - earlier
                }
            }
        )*
    };
}

// the span between two signed values may not fit the signed type itself
macro_rules! signed_timestamp {
    ($($int:ty => $span:ty),* $(,)?) => {
        $(
            impl Timestamp for $int {
                type Span = $span;

                fn span_since(self, earlier: Self) -> Self::Span {
                    self.abs_diff(earlier)
                }
            }
        )*
    };
}

unsigned_timestamp!(u8, u16, u32, u64, u128, usize);
signed_timestamp!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

#[cfg(feature = "chrono_v0_4")]
impl Timestamp for chrono_v0_4::DateTime<chrono_v0_4::Utc> {
    type Span = chrono_v0_4::TimeDelta;

    fn span_since(self, earlier: Self) -> Self::Span {
        self.signed_duration_since(earlier)
    }
}

#[cfg(feature = "chrono_v0_4")]
impl Timestamp for chrono_v0_4::NaiveDateTime {
    type Span = chrono_v0_4::TimeDelta;

    fn span_since(self, earlier: Self) -> Self::Span {
        self.signed_duration_since(earlier)
    }
}

/// A single hop: `source` reaches `target` at snapshot `time`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interaction<N, T> {
    /// Node the hop leaves from
    pub source: N,
    /// Node the hop arrives at
    pub target: N,
    /// Snapshot in which the hop happens
    pub time: T,
}

impl<N, T> Interaction<N, T> {
    /// Creates a new interaction
    pub fn new(source: N, target: N, time: T) -> Self {
        Self {
            source,
            target,
            time,
        }
    }
}

impl<N, T> From<(N, N, T)> for Interaction<N, T> {
    fn from((source, target, time): (N, N, T)) -> Self {
        Self::new(source, target, time)
    }
}
