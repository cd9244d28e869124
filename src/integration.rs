//! Integration trait for time-evolving network stores.

use crate::types::{NodeId, Timestamp};

/// Read-only view of a time-evolving network.
///
/// This trait is the only way the path engine touches a network. Stores
/// implement it to expose their snapshots; the engine never mutates them.
///
/// # Example
///
/// ```rust
/// use tempograph::TemporalNetwork;
///
/// fn busiest_snapshot<G: TemporalNetwork>(network: &G) -> Option<G::Time> {
///     let nodes = network.nodes();
///     network.timestamps().into_iter().max_by_key(|&t| {
///         nodes.iter().map(|n| network.neighbors(n, t).len()).sum::<usize>()
///     })
/// }
/// ```
pub trait TemporalNetwork {
    /// Node identifier type
    type Node: NodeId;

    /// Snapshot identifier type
    type Time: Timestamp;

    /// Returns every timestamp at which some interaction occurs.
    ///
    /// The result is sorted ascending and contains no duplicates.
    fn timestamps(&self) -> Vec<Self::Time>;

    /// Returns the nodes reachable from `node` in one hop at `time`.
    ///
    /// Directed networks return out-neighbors only.
    fn neighbors(&self, node: &Self::Node, time: Self::Time) -> Vec<Self::Node>;

    /// Returns every node of the network.
    fn nodes(&self) -> Vec<Self::Node>;
}

impl<G: TemporalNetwork + ?Sized> TemporalNetwork for &G {
    type Node = G::Node;
    type Time = G::Time;

    fn timestamps(&self) -> Vec<Self::Time> {
        (**self).timestamps()
    }

    fn neighbors(&self, node: &Self::Node, time: Self::Time) -> Vec<Self::Node> {
        (**self).neighbors(node, time)
    }

    fn nodes(&self) -> Vec<Self::Node> {
        (**self).nodes()
    }
}
