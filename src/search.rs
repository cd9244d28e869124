//! Configurable path search.

use crate::all_pairs::{PathMap, all_time_respecting_paths, all_time_respecting_paths_parallel};
use crate::annotate::{PathAnnotation, annotate_paths};
use crate::dag::TemporalDag;
use crate::enumerate::time_respecting_paths;
use crate::error::PathError;
use crate::integration::TemporalNetwork;
use crate::path::Path;
use crate::types::Timestamp;
use crate::window::resolve_window;

/// Default number of all-pairs worker threads.
///
/// A single worker keeps the search on the calling thread.
const DEFAULT_WORKERS: usize = 1;

/// Builder for configuring path queries.
///
/// # Example
///
/// ```rust
/// # use tempograph::{PathSearch, TemporalNetwork};
/// # struct Empty;
/// # impl TemporalNetwork for Empty {
/// #     type Node = u32;
/// #     type Time = u64;
/// #     fn timestamps(&self) -> Vec<u64> { vec![10, 20, 30] }
/// #     fn neighbors(&self, _: &u32, _: u64) -> Vec<u32> { Vec::new() }
/// #     fn nodes(&self) -> Vec<u32> { vec![1, 2] }
/// # }
/// # let network = Empty;
/// let search = PathSearch::new().window(10, 20).workers(4);
///
/// let paths = search.paths(&network, &1, &2)?;
/// let everything = search.all_pairs(&network)?;
/// assert!(paths.is_empty() && everything.is_empty());
/// # Ok::<(), tempograph::PathError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSearch<T> {
    start: Option<T>,
    end: Option<T>,
    workers: usize,
}

impl<T: Timestamp> PathSearch<T> {
    /// Creates a search over the whole network on a single thread.
    pub fn new() -> Self {
        Self {
            start: None,
            end: None,
            workers: DEFAULT_WORKERS,
        }
    }

    /// Sets the first snapshot of the window (inclusive).
    ///
    /// Default: the network's first snapshot
    #[must_use]
    pub fn start(mut self, start: T) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the last snapshot of the window (inclusive).
    ///
    /// Default: the network's last snapshot
    #[must_use]
    pub fn end(mut self, end: T) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets both window bounds.
    #[must_use]
    pub fn window(self, start: T, end: T) -> Self {
        self.start(start).end(end)
    }

    /// Sets the number of threads [`PathSearch::all_pairs`] spreads source nodes over.
    ///
    /// Pairs are independent, so results do not depend on this setting.
    /// `0` is treated as `1`.
    ///
    /// Default: 1
    #[must_use]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Returns the configured lower bound, if any.
    pub fn start_bound(&self) -> Option<T> {
        self.start
    }

    /// Returns the configured upper bound, if any.
    pub fn end_bound(&self) -> Option<T> {
        self.end
    }

    /// Returns the configured worker count.
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Builds the temporal DAG rooted at `root` over the configured window.
    pub fn dag<G>(&self, network: &G, root: &G::Node) -> Result<TemporalDag<G::Node, T>, PathError>
    where
        G: TemporalNetwork<Time = T> + ?Sized,
    {
        let timestamps = network.timestamps();
        let window = resolve_window(&timestamps, self.start, self.end)?;
        Ok(TemporalDag::build(network, root, window))
    }

    /// Computes all time-respecting paths from `u` to `v`.
    pub fn paths<G>(
        &self,
        network: &G,
        u: &G::Node,
        v: &G::Node,
    ) -> Result<Vec<Path<G::Node, T>>, PathError>
    where
        G: TemporalNetwork<Time = T> + ?Sized,
    {
        time_respecting_paths(network, u, v, self.start, self.end)
    }

    /// Computes and classifies the paths from `u` to `v`.
    ///
    /// Returns `None` when `v` is unreachable from `u` within the window.
    pub fn annotated_paths<G>(
        &self,
        network: &G,
        u: &G::Node,
        v: &G::Node,
    ) -> Result<Option<PathAnnotation<G::Node, T>>, PathError>
    where
        G: TemporalNetwork<Time = T> + ?Sized,
    {
        let paths = self.paths(network, u, v)?;
        if paths.is_empty() {
            return Ok(None);
        }
        annotate_paths(&paths).map(Some)
    }

    /// Computes the paths between every ordered pair of distinct nodes.
    pub fn all_pairs<G>(&self, network: &G) -> Result<PathMap<G::Node, T>, PathError>
    where
        G: TemporalNetwork<Time = T> + Sync + ?Sized,
        G::Node: Send + Sync,
        T: Send + Sync,
    {
        if self.workers > 1 {
            all_time_respecting_paths_parallel(network, self.start, self.end, self.workers)
        } else {
            all_time_respecting_paths(network, self.start, self.end)
        }
    }
}

impl<T: Timestamp> Default for PathSearch<T> {
    fn default() -> Self {
        Self::new()
    }
}
