//! All-pairs path computation.

use crate::dag::TemporalDag;
use crate::error::PathError;
use crate::integration::TemporalNetwork;
use crate::path::Path;
use crate::types::{NodeId, Timestamp};
use crate::window::resolve_window;
use std::collections::BTreeMap;

/// Paths keyed by ordered `(source, destination)` pair.
pub type PathMap<N, T> = BTreeMap<(N, N), Vec<Path<N, T>>>;

/// Computes the time-respecting paths between every ordered pair of distinct nodes.
///
/// Only pairs connected within the window appear in the result. Runs on the
/// calling thread; [`PathSearch::workers`](crate::PathSearch::workers) spreads
/// the same computation over several threads.
///
/// # Errors
///
/// Returns [`PathError::InvalidWindow`] or [`PathError::NoSnapshots`] as
/// [`resolve_window`] does.
pub fn all_time_respecting_paths<G>(
    network: &G,
    start: Option<G::Time>,
    end: Option<G::Time>,
) -> Result<PathMap<G::Node, G::Time>, PathError>
where
    G: TemporalNetwork + ?Sized,
{
    let timestamps = network.timestamps();
    let window = resolve_window(&timestamps, start, end)?;
    let nodes = sorted_nodes(network);

    let paths = paths_from_roots(network, &nodes, &nodes, window);
    log_summary(nodes.len(), &paths);
    Ok(paths)
}

/// Same as [`all_time_respecting_paths`] with the source nodes split across
/// `workers` scoped threads.
pub(crate) fn all_time_respecting_paths_parallel<G>(
    network: &G,
    start: Option<G::Time>,
    end: Option<G::Time>,
    workers: usize,
) -> Result<PathMap<G::Node, G::Time>, PathError>
where
    G: TemporalNetwork + Sync + ?Sized,
    G::Node: Send + Sync,
    G::Time: Send + Sync,
{
    let timestamps = network.timestamps();
    let window = resolve_window(&timestamps, start, end)?;
    let nodes = sorted_nodes(network);
    let chunk_size = nodes.len().div_ceil(workers.max(1)).max(1);

    let paths = std::thread::scope(|scope| {
        let nodes = nodes.as_slice();
        let handles: Vec<_> = nodes
            .chunks(chunk_size)
            .map(|roots| scope.spawn(move || paths_from_roots(network, roots, nodes, window)))
            .collect();

        let mut merged = BTreeMap::new();
        for handle in handles {
            let part = handle.join().map_err(|_| PathError::WorkerPanicked)?;
            merged.extend(part);
        }
        Ok::<_, PathError>(merged)
    })?;

    log_summary(nodes.len(), &paths);
    Ok(paths)
}

fn sorted_nodes<G: TemporalNetwork + ?Sized>(network: &G) -> Vec<G::Node> {
    let mut nodes = network.nodes();
    nodes.sort();
    nodes.dedup();
    nodes
}

/// Builds one DAG per root and reads every destination's paths from it.
///
/// The DAG only depends on the root, so this matches a separate build per pair.
fn paths_from_roots<G>(
    network: &G,
    roots: &[G::Node],
    destinations: &[G::Node],
    window: &[G::Time],
) -> PathMap<G::Node, G::Time>
where
    G: TemporalNetwork + ?Sized,
{
    let mut paths = BTreeMap::new();
    for root in roots {
        let dag = TemporalDag::build(network, root, window);
        if dag.sources.is_empty() {
            continue;
        }
        for destination in destinations.iter().filter(|&node| node != root) {
            let found = dag.paths_to(destination);
            if !found.is_empty() {
                paths.insert((root.clone(), destination.clone()), found);
            }
        }
    }
    paths
}

#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
fn log_summary<N: NodeId, T: Timestamp>(node_count: usize, paths: &PathMap<N, T>) {
    #[cfg(feature = "logging")]
    log::info!(
        "all-pairs search over {node_count} nodes: {} connected pairs, {} paths",
        paths.len(),
        paths.values().map(Vec::len).sum::<usize>()
    );
}
