//! Path classification by optimality criteria.
//!
//! - **shortest**: fewest interactions
//! - **fastest**: smallest span between first and last interaction
//! - **foremost**: earliest arrival at the destination
//! - **fastest shortest**: the fastest among the shortest
//! - **shortest fastest**: the shortest among the fastest
//!
//! Every class keeps all tying paths. The classes may overlap.

use crate::error::PathError;
use crate::path::Path;
use crate::types::{NodeId, Timestamp};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// The optimality classes a path can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathKind {
    /// Minimal number of interactions.
    Shortest,
    /// Minimal duration.
    Fastest,
    /// Minimal arrival time.
    Foremost,
    /// Minimal duration among the shortest paths.
    FastestShortest,
    /// Minimal length among the fastest paths.
    ShortestFastest,
}

impl PathKind {
    /// Every kind, in annotation field order.
    pub const ALL: [PathKind; 5] = [
        PathKind::Shortest,
        PathKind::Fastest,
        PathKind::Foremost,
        PathKind::FastestShortest,
        PathKind::ShortestFastest,
    ];

    /// Returns the snake-case name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shortest => "shortest",
            Self::Fastest => "fastest",
            Self::Foremost => "foremost",
            Self::FastestShortest => "fastest_shortest",
            Self::ShortestFastest => "shortest_fastest",
        }
    }
}

/// The optimal subsets of a path set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "N: Serialize, T: Serialize",
    deserialize = "N: NodeId + Deserialize<'de>, T: Timestamp + Deserialize<'de>"
))]
pub struct PathAnnotation<N, T> {
    /// Paths with the fewest interactions.
    pub shortest: Vec<Path<N, T>>,
    /// Paths with the smallest duration.
    pub fastest: Vec<Path<N, T>>,
    /// Paths with the earliest arrival.
    pub foremost: Vec<Path<N, T>>,
    /// The fastest paths among `shortest`, without duplicates.
    pub fastest_shortest: Vec<Path<N, T>>,
    /// The shortest paths among `fastest`, without duplicates.
    pub shortest_fastest: Vec<Path<N, T>>,
}

impl<N: NodeId, T: Timestamp> PathAnnotation<N, T> {
    /// Returns the paths of one class.
    pub fn get(&self, kind: PathKind) -> &[Path<N, T>] {
        match kind {
            PathKind::Shortest => &self.shortest,
            PathKind::Fastest => &self.fastest,
            PathKind::Foremost => &self.foremost,
            PathKind::FastestShortest => &self.fastest_shortest,
            PathKind::ShortestFastest => &self.shortest_fastest,
        }
    }

    /// Returns every class `path` belongs to.
    pub fn kinds_of(&self, path: &Path<N, T>) -> Vec<PathKind> {
        PathKind::ALL
            .into_iter()
            .filter(|&kind| self.get(kind).contains(path))
            .collect()
    }
}

/// Running minimum that keeps every member tying with it.
struct Minimum<'a, K, P> {
    best: Option<K>,
    members: Vec<&'a P>,
}

impl<'a, K: Ord, P> Minimum<'a, K, P> {
    fn new() -> Self {
        Self {
            best: None,
            members: Vec::new(),
        }
    }

    fn offer(&mut self, key: K, member: &'a P) {
        match self.best.as_ref().map(|best| key.cmp(best)) {
            Some(Ordering::Greater) => {}
            Some(Ordering::Equal) => self.members.push(member),
            Some(Ordering::Less) | None => {
                self.best = Some(key);
                self.members.clear();
                self.members.push(member);
            }
        }
    }
}

/// Classifies `paths` into shortest, fastest, foremost and the two compound classes.
///
/// One pass tracks the three running minima independently; two post-passes
/// refine `shortest` by duration and `fastest` by length.
///
/// # Errors
///
/// Returns [`PathError::EmptyInput`] if `paths` is empty.
///
/// # Example
///
/// ```rust
/// use tempograph::{Interaction, Path, annotate_paths};
///
/// let relay = Path::new(vec![Interaction::new('a', 'b', 1), Interaction::new('b', 'c', 2)]).unwrap();
/// let direct = Path::new(vec![Interaction::new('a', 'c', 3)]).unwrap();
///
/// let annotation = annotate_paths(&[relay.clone(), direct.clone()]).unwrap();
/// assert_eq!(annotation.shortest, vec![direct.clone()]);
/// assert_eq!(annotation.fastest, vec![direct]);
/// assert_eq!(annotation.foremost, vec![relay]);
/// ```
pub fn annotate_paths<N: NodeId, T: Timestamp>(
    paths: &[Path<N, T>],
) -> Result<PathAnnotation<N, T>, PathError> {
    if paths.is_empty() {
        return Err(PathError::EmptyInput);
    }

    let mut shortest = Minimum::new();
    let mut fastest = Minimum::new();
    let mut foremost = Minimum::new();

    for path in paths {
        shortest.offer(path.len(), path);
        fastest.offer(path.duration(), path);
        foremost.offer(path.arrival(), path);
    }

    let mut fastest_shortest = Minimum::new();
    for &path in &shortest.members {
        fastest_shortest.offer(path.duration(), path);
    }

    let mut shortest_fastest = Minimum::new();
    for &path in &fastest.members {
        shortest_fastest.offer(path.len(), path);
    }

    Ok(PathAnnotation {
        shortest: owned(&shortest.members),
        fastest: owned(&fastest.members),
        foremost: owned(&foremost.members),
        fastest_shortest: distinct(&fastest_shortest.members),
        shortest_fastest: distinct(&shortest_fastest.members),
    })
}

fn owned<N: NodeId, T: Timestamp>(members: &[&Path<N, T>]) -> Vec<Path<N, T>> {
    members.iter().map(|&path| path.clone()).collect()
}

/// Clones `members`, dropping repeats of a path already taken.
fn distinct<N: NodeId, T: Timestamp>(members: &[&Path<N, T>]) -> Vec<Path<N, T>> {
    let mut seen = HashSet::new();
    members
        .iter()
        .filter(|&&path| seen.insert(path))
        .map(|&path| path.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Interaction;

    fn path(hops: &[(char, char, u32)]) -> Path<char, u32> {
        Path::new(hops.iter().copied().map(Interaction::from).collect()).unwrap()
    }

    #[test]
    fn test_relay_versus_direct() {
        let relay = path(&[('A', 'B', 1), ('B', 'C', 2)]);
        let direct = path(&[('A', 'C', 3)]);
        let annotation = annotate_paths(&[relay.clone(), direct.clone()]).unwrap();

        assert_eq!(annotation.shortest, vec![direct.clone()]);
        assert_eq!(annotation.fastest, vec![direct.clone()]);
        assert_eq!(annotation.foremost, vec![relay.clone()]);
        assert_eq!(annotation.fastest_shortest, vec![direct.clone()]);
        assert_eq!(annotation.shortest_fastest, vec![direct.clone()]);

        assert_eq!(annotation.kinds_of(&relay), vec![PathKind::Foremost]);
        assert_eq!(
            annotation.kinds_of(&direct),
            vec![
                PathKind::Shortest,
                PathKind::Fastest,
                PathKind::FastestShortest,
                PathKind::ShortestFastest
            ]
        );
    }

    #[test]
    fn test_ties_are_all_kept() {
        let early = path(&[('A', 'B', 1), ('B', 'D', 2)]);
        let late = path(&[('A', 'C', 4), ('C', 'D', 5)]);
        let slow = path(&[('A', 'D', 2)]);
        let annotation = annotate_paths(&[early.clone(), late.clone(), slow.clone()]).unwrap();

        assert_eq!(annotation.shortest, vec![slow.clone()]);
        assert_eq!(annotation.fastest, vec![slow.clone()]);
        assert_eq!(annotation.foremost, vec![early.clone(), slow.clone()]);
    }

    #[test]
    fn test_compound_classes_differ() {
        let brief = path(&[('A', 'B', 1), ('B', 'Z', 6)]);
        let quick = path(&[('A', 'C', 4), ('C', 'D', 4), ('D', 'Z', 4)]);
        let annotation = annotate_paths(&[brief.clone(), quick.clone()]).unwrap();

        assert_eq!(annotation.shortest, vec![brief.clone()]);
        assert_eq!(annotation.fastest, vec![quick.clone()]);
        assert_eq!(annotation.foremost, vec![quick.clone()]);
        assert_eq!(annotation.fastest_shortest, vec![brief]);
        assert_eq!(annotation.shortest_fastest, vec![quick]);
    }

    #[test]
    fn test_compound_refines_ties() {
        let slow_pair = path(&[('A', 'C', 1), ('C', 'Z', 6)]);
        let quick_pair = path(&[('A', 'B', 3), ('B', 'Z', 3)]);
        let quick_triple = path(&[('A', 'D', 2), ('D', 'E', 2), ('E', 'Z', 2)]);
        let paths = [slow_pair.clone(), quick_pair.clone(), quick_triple.clone()];
        let annotation = annotate_paths(&paths).unwrap();

        assert_eq!(annotation.shortest, vec![slow_pair, quick_pair.clone()]);
        assert_eq!(annotation.fastest, vec![quick_pair.clone(), quick_triple.clone()]);
        assert_eq!(annotation.foremost, vec![quick_triple]);
        assert_eq!(annotation.fastest_shortest, vec![quick_pair.clone()]);
        assert_eq!(annotation.shortest_fastest, vec![quick_pair]);
    }

    #[test]
    fn test_fastest_shortest_drops_duplicates() {
        let direct = path(&[('A', 'C', 3)]);
        let annotation = annotate_paths(&[direct.clone(), direct.clone()]).unwrap();

        assert_eq!(annotation.shortest.len(), 2);
        assert_eq!(annotation.fastest.len(), 2);
        assert_eq!(annotation.foremost.len(), 2);
        assert_eq!(annotation.fastest_shortest, vec![direct.clone()]);
        assert_eq!(annotation.shortest_fastest, vec![direct]);
    }

    #[test]
    fn test_empty_input() {
        let paths: Vec<Path<char, u32>> = Vec::new();
        assert_eq!(annotate_paths(&paths), Err(PathError::EmptyInput));
    }

    #[test]
    fn test_get_matches_fields() {
        let annotation = annotate_paths(&[path(&[('A', 'B', 1)])]).unwrap();
        for kind in PathKind::ALL {
            assert_eq!(annotation.get(kind).len(), 1, "{}", kind.name());
        }
    }
}
