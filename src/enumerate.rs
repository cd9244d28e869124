//! Simple path enumeration over a temporal DAG.

use crate::dag::{TemporalDag, Vertex};
use crate::error::PathError;
use crate::integration::TemporalNetwork;
use crate::path::Path;
use crate::types::{Interaction, NodeId, Timestamp};
use crate::window::resolve_window;
use petgraph::algo;
use petgraph::graph::NodeIndex;
use std::hash::RandomState;

impl<N: NodeId, T: Timestamp> TemporalDag<N, T> {
    /// Returns a lazy iterator over the simple paths from `from` to `to`.
    ///
    /// Each item is the chain of vertices from `from` to `to`, both included.
    /// Yields nothing if either vertex is missing from the DAG or if `from`
    /// equals `to`.
    pub fn simple_paths<'a>(
        &'a self,
        from: &Vertex<N, T>,
        to: &Vertex<N, T>,
    ) -> impl Iterator<Item = Vec<&'a Vertex<N, T>>> + use<'a, N, T> {
        self.index_of(from)
            .zip(self.index_of(to))
            .into_iter()
            .flat_map(move |(from, to)| self.chains(from, to))
            .map(move |chain| {
                chain
                    .into_iter()
                    .map(|index| &self.graph[index])
                    .collect::<Vec<_>>()
            })
    }

    fn chains(&self, from: NodeIndex, to: NodeIndex) -> impl Iterator<Item = Vec<NodeIndex>> + '_ {
        algo::all_simple_paths::<Vec<NodeIndex>, _, RandomState>(&self.graph, from, to, 0, None)
    }

    /// Returns every time-respecting path from the root to `destination`.
    ///
    /// Paths are grouped by (source, target) pair, sources and targets both
    /// in the order the sweep discovered them. Returns an empty list when the
    /// destination was never reached.
    pub fn paths_to(&self, destination: &N) -> Vec<Path<N, T>> {
        let targets = self.target_indices(destination);
        let mut paths = Vec::new();
        for &source in &self.sources {
            for &target in targets {
                paths.extend(
                    self.chains(source, target)
                        .map(|chain| self.translate(&chain)),
                );
            }
        }
        paths
    }

    /// Turns a vertex chain into interactions: each step `a -> b` becomes
    /// `(node(a), node(b), time(b))`.
    fn translate(&self, chain: &[NodeIndex]) -> Path<N, T> {
        let interactions = chain
            .windows(2)
            .filter_map(|step| match &self.graph[step[1]] {
                Vertex::Copy(node, time) => Some(Interaction::new(
                    self.graph[step[0]].node().clone(),
                    node.clone(),
                    *time,
                )),
                // the root never has incoming edges
                Vertex::Root(_) => None,
            })
            .collect();
        Path::from_chain(interactions)
    }
}

/// Computes all simple time-respecting paths from `u` to `v` within `[start, end]`.
///
/// Missing bounds default to the network's first and last snapshots.
///
/// # Errors
///
/// Returns [`PathError::InvalidWindow`] if the window is not a sub-range of the
/// network's snapshots and [`PathError::NoSnapshots`] if there are none.
///
/// # Example
///
/// See the [crate-level documentation](crate).
pub fn time_respecting_paths<G>(
    network: &G,
    u: &G::Node,
    v: &G::Node,
    start: Option<G::Time>,
    end: Option<G::Time>,
) -> Result<Vec<Path<G::Node, G::Time>>, PathError>
where
    G: TemporalNetwork + ?Sized,
{
    let timestamps = network.timestamps();
    let window = resolve_window(&timestamps, start, end)?;
    Ok(TemporalDag::build(network, u, window).paths_to(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Snapshots;

    fn hops(path: &Path<char, u32>) -> Vec<(char, char, u32)> {
        path.iter()
            .map(|hop| (hop.source, hop.target, hop.time))
            .collect()
    }

    fn sorted(paths: &[Path<char, u32>]) -> Vec<Vec<(char, char, u32)>> {
        let mut all: Vec<_> = paths.iter().map(hops).collect();
        all.sort();
        all
    }

    #[test]
    fn test_two_routes() {
        let network = Snapshots::directed(&[('A', 'B', 1), ('B', 'C', 2), ('A', 'C', 3)]);
        let paths = time_respecting_paths(&network, &'A', &'C', Some(1), Some(3)).unwrap();

        assert_eq!(
            sorted(&paths),
            vec![
                vec![('A', 'B', 1), ('B', 'C', 2)],
                vec![('A', 'C', 3)],
            ]
        );
    }

    #[test]
    fn test_grouped_by_source_then_target() {
        let network = Snapshots::directed(&[('A', 'B', 1), ('B', 'C', 2), ('A', 'C', 3)]);
        let paths = time_respecting_paths(&network, &'A', &'C', None, None).unwrap();

        // source (A,1) first, then source (A,3)
        assert_eq!(hops(&paths[0]), vec![('A', 'B', 1), ('B', 'C', 2)]);
        assert_eq!(hops(&paths[1]), vec![('A', 'C', 3)]);
    }

    #[test]
    fn test_unreachable_pair_is_empty() {
        let network = Snapshots::directed(&[('A', 'B', 1), ('B', 'C', 2), ('A', 'C', 3)]);
        assert!(
            time_respecting_paths(&network, &'C', &'A', None, None)
                .unwrap()
                .is_empty()
        );
        // backwards in time: B->C happens before A->B
        let network = Snapshots::directed(&[('B', 'C', 1), ('A', 'B', 2)]);
        assert!(
            time_respecting_paths(&network, &'A', &'C', None, None)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_window_excludes_early_hops() {
        let network = Snapshots::directed(&[('A', 'B', 1), ('B', 'C', 2), ('A', 'C', 3)]);
        let paths = time_respecting_paths(&network, &'A', &'C', Some(2), None).unwrap();
        assert_eq!(sorted(&paths), vec![vec![('A', 'C', 3)]]);
    }

    #[test]
    fn test_invalid_window() {
        let network = Snapshots::directed(&[('A', 'B', 1), ('B', 'C', 2), ('A', 'C', 3)]);
        let result = time_respecting_paths(&network, &'A', &'C', Some(5), None);
        assert!(matches!(result, Err(PathError::InvalidWindow { .. })));
    }

    #[test]
    fn test_undirected_paths_respect_time() {
        let network = Snapshots::undirected(&[('A', 'B', 1), ('B', 'C', 2), ('A', 'C', 3)]);
        let paths = time_respecting_paths(&network, &'A', &'C', None, None).unwrap();

        assert_eq!(
            sorted(&paths),
            vec![
                vec![('A', 'B', 1), ('B', 'C', 2)],
                vec![('A', 'B', 1), ('B', 'C', 2), ('C', 'A', 3), ('A', 'C', 3)],
                vec![('A', 'C', 3)],
            ]
        );
        for path in &paths {
            assert!(Path::new(path.interactions().to_vec()).is_ok());
        }
    }

    #[test]
    fn test_root_self_interaction_is_not_a_hop() {
        let network = Snapshots::directed(&[('A', 'A', 1), ('A', 'B', 2)]);
        let paths = time_respecting_paths(&network, &'A', &'B', None, None).unwrap();
        assert_eq!(sorted(&paths), vec![vec![('A', 'B', 2)]]);
        assert!(
            time_respecting_paths(&network, &'A', &'A', None, None)
                .unwrap()
                .is_empty()
        );

        // a self-interaction away from the root stays a hop
        let network = Snapshots::directed(&[('A', 'B', 1), ('B', 'B', 2), ('B', 'C', 3)]);
        let paths = time_respecting_paths(&network, &'A', &'C', None, None).unwrap();
        assert_eq!(
            sorted(&paths),
            vec![
                vec![('A', 'B', 1), ('B', 'B', 2), ('B', 'C', 3)],
                vec![('A', 'B', 1), ('B', 'C', 3)],
            ]
        );
    }

    #[test]
    fn test_diamond_has_both_branches() {
        let network = Snapshots::directed(&[
            ('S', 'L', 1),
            ('S', 'R', 1),
            ('L', 'T', 2),
            ('R', 'T', 2),
        ]);
        let paths = time_respecting_paths(&network, &'S', &'T', None, None).unwrap();
        assert_eq!(
            sorted(&paths),
            vec![
                vec![('S', 'L', 1), ('L', 'T', 2)],
                vec![('S', 'R', 1), ('R', 'T', 2)],
            ]
        );
    }

    #[test]
    fn test_simple_paths_iterator() {
        let network = Snapshots::directed(&[('A', 'B', 1), ('B', 'C', 2)]);
        let dag = TemporalDag::build(&network, &'A', &[1, 2]);

        let chains: Vec<_> = dag
            .simple_paths(&Vertex::Copy('A', 1), &Vertex::Copy('C', 2))
            .collect();
        assert_eq!(
            chains,
            vec![vec![
                &Vertex::Copy('A', 1),
                &Vertex::Copy('B', 1),
                &Vertex::Copy('C', 2)
            ]]
        );

        let same = dag.simple_paths(&Vertex::Copy('B', 1), &Vertex::Copy('B', 1));
        assert_eq!(same.count(), 0);
        let missing = dag.simple_paths(&Vertex::Copy('A', 1), &Vertex::Copy('Z', 9));
        assert_eq!(missing.count(), 0);
    }
}
