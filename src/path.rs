//! Time-respecting paths and their metrics.

use crate::error::PathError;
use crate::types::{Interaction, NodeId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};

/// A non-empty, chained, time-respecting sequence of interactions.
///
/// Consecutive interactions share a node (`interactions[i].target ==
/// interactions[i + 1].source`) and their timestamps never decrease.
///
/// Serializes as the plain interaction list. Deserialization runs the same
/// checks as [`Path::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path<N, T> {
    interactions: Vec<Interaction<N, T>>,
}

#[allow(clippy::len_without_is_empty)]
impl<N: NodeId, T: Timestamp> Path<N, T> {
    /// Creates a path after checking that it is non-empty, chained and time-respecting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tempograph::{Interaction, Path, PathError};
    ///
    /// let path = Path::new(vec![
    ///     Interaction::new('a', 'b', 1u32),
    ///     Interaction::new('b', 'c', 4),
    /// ])
    /// .unwrap();
    /// assert_eq!(path.duration(), 3);
    ///
    /// let backwards = Path::new(vec![
    ///     Interaction::new('a', 'b', 4),
    ///     Interaction::new('b', 'c', 1),
    /// ]);
    /// assert_eq!(backwards, Err(PathError::TimeReversal { position: 1 }));
    /// ```
    pub fn new(interactions: Vec<Interaction<N, T>>) -> Result<Self, PathError> {
        if interactions.is_empty() {
            return Err(PathError::EmptyPath);
        }
        for (position, pair) in interactions.windows(2).enumerate() {
            if pair[0].target != pair[1].source {
                return Err(PathError::BrokenChain {
                    position: position + 1,
                });
            }
            if pair[1].time < pair[0].time {
                return Err(PathError::TimeReversal {
                    position: position + 1,
                });
            }
        }
        Ok(Self { interactions })
    }

    /// Wraps interactions the caller has already built as a valid chain.
    pub(crate) fn from_chain(interactions: Vec<Interaction<N, T>>) -> Self {
        debug_assert!(Self::new(interactions.clone()).is_ok());
        Self { interactions }
    }

    /// Returns the interactions in order.
    pub fn interactions(&self) -> &[Interaction<N, T>] {
        &self.interactions
    }

    /// Returns an iterator over the interactions.
    pub fn iter(&self) -> std::slice::Iter<'_, Interaction<N, T>> {
        self.interactions.iter()
    }

    /// Consumes the path, returning its interactions.
    pub fn into_interactions(self) -> Vec<Interaction<N, T>> {
        self.interactions
    }

    /// Number of interactions.
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Node the path starts from.
    pub fn source(&self) -> &N {
        &self.first().source
    }

    /// Node the path ends at.
    pub fn target(&self) -> &N {
        &self.last().target
    }

    /// Timestamp of the first interaction.
    pub fn departure(&self) -> T {
        self.first().time
    }

    /// Timestamp of the last interaction.
    pub fn arrival(&self) -> T {
        self.last().time
    }

    /// Span between the first and the last interaction.
    pub fn duration(&self) -> T::Span {
        self.arrival().span_since(self.departure())
    }

    fn first(&self) -> &Interaction<N, T> {
        &self.interactions[0]
    }

    fn last(&self) -> &Interaction<N, T> {
        &self.interactions[self.interactions.len() - 1]
    }
}

impl<N: NodeId, T: Timestamp> TryFrom<Vec<Interaction<N, T>>> for Path<N, T> {
    type Error = PathError;

    fn try_from(interactions: Vec<Interaction<N, T>>) -> Result<Self, Self::Error> {
        Self::new(interactions)
    }
}

impl<'de, N, T> Deserialize<'de> for Path<N, T>
where
    N: NodeId + Deserialize<'de>,
    T: Timestamp + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let interactions = Vec::<Interaction<N, T>>::deserialize(deserializer)?;
        Self::new(interactions).map_err(serde::de::Error::custom)
    }
}

impl<N, T> IntoIterator for Path<N, T> {
    type Item = Interaction<N, T>;
    type IntoIter = std::vec::IntoIter<Interaction<N, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.interactions.into_iter()
    }
}

impl<'a, N, T> IntoIterator for &'a Path<N, T> {
    type Item = &'a Interaction<N, T>;
    type IntoIter = std::slice::Iter<'a, Interaction<N, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.interactions.iter()
    }
}

/// Returns the number of interactions composing the path.
pub fn path_length<N: NodeId, T: Timestamp>(path: &Path<N, T>) -> usize {
    path.len()
}

/// Returns the span between the path's last and first timestamps.
pub fn path_duration<N: NodeId, T: Timestamp>(path: &Path<N, T>) -> T::Span {
    path.duration()
}

/// Returns the timestamp at which the path reaches its destination.
pub fn path_arrival<N: NodeId, T: Timestamp>(path: &Path<N, T>) -> T {
    path.arrival()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::annotate_paths;

    fn hops(raw: &[(char, char, u32)]) -> Vec<Interaction<char, u32>> {
        raw.iter().copied().map(Interaction::from).collect()
    }

    #[test]
    fn test_metrics() {
        let path = Path::new(hops(&[('a', 'b', 2), ('b', 'c', 2), ('c', 'd', 7)])).unwrap();
        assert_eq!(path_length(&path), 3);
        assert_eq!(path_duration(&path), 5);
        assert_eq!(path_arrival(&path), 7);
        assert_eq!(path.departure(), 2);
        assert_eq!(*path.source(), 'a');
        assert_eq!(*path.target(), 'd');
    }

    #[test]
    fn test_single_hop_has_zero_duration() {
        let path = Path::new(hops(&[('a', 'c', 3)])).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.duration(), 0);
    }

    #[test]
    fn test_signed_duration_does_not_overflow() {
        let path = Path::new(vec![
            Interaction::new('a', 'b', -100i8),
            Interaction::new('b', 'c', 100i8),
        ])
        .unwrap();
        assert_eq!(path_duration(&path), 200u8);

        let path = Path::new(vec![
            Interaction::new('a', 'b', i64::MIN),
            Interaction::new('b', 'c', i64::MAX),
        ])
        .unwrap();
        assert_eq!(path.duration(), u64::MAX);
        assert!(annotate_paths(&[path]).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Path::<char, u32>::new(Vec::new()), Err(PathError::EmptyPath));
    }

    #[test]
    fn test_rejects_broken_chain() {
        let result = Path::new(hops(&[('a', 'b', 1), ('c', 'd', 2)]));
        assert_eq!(result, Err(PathError::BrokenChain { position: 1 }));
    }

    #[test]
    fn test_rejects_time_reversal() {
        let result = Path::try_from(hops(&[('a', 'b', 1), ('b', 'c', 3), ('c', 'd', 2)]));
        assert_eq!(result, Err(PathError::TimeReversal { position: 2 }));
    }

    #[test]
    fn test_iteration() {
        let path = Path::new(hops(&[('a', 'b', 1), ('b', 'c', 2)])).unwrap();
        let targets: Vec<char> = path.iter().map(|hop| hop.target).collect();
        assert_eq!(targets, vec!['b', 'c']);
        assert_eq!(path.into_interactions().len(), 2);
    }
}
