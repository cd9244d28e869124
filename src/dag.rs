//! Rooted temporal DAG construction.
//!
//! The DAG unrolls a time-evolving network forward from one root node. Its
//! vertices are timestamped copies of network nodes: `Copy(n, t)` means "at
//! node `n` at or after snapshot `t`". Edges only ever point from a copy at
//! one snapshot to a copy at the same or a later snapshot, and snapshots are
//! swept in increasing order, so the result is acyclic.

use crate::integration::TemporalNetwork;
use crate::types::{NodeId, Timestamp};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// A vertex of a [`TemporalDag`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Vertex<N, T> {
    /// The root node before its first departure.
    Root(N),
    /// A node reached (or departed from) at a snapshot.
    Copy(N, T),
}

impl<N, T: Copy> Vertex<N, T> {
    /// Returns the underlying network node.
    pub fn node(&self) -> &N {
        match self {
            Vertex::Root(node) | Vertex::Copy(node, _) => node,
        }
    }

    /// Returns the snapshot of a copy, or `None` for the root.
    pub fn time(&self) -> Option<T> {
        match self {
            Vertex::Root(_) => None,
            Vertex::Copy(_, time) => Some(*time),
        }
    }

    /// Returns `true` for the not-yet-departed root.
    pub fn is_root(&self) -> bool {
        matches!(self, Vertex::Root(_))
    }
}

/// Directed acyclic graph of timestamped node copies reachable from a root.
///
/// The DAG does not depend on a destination: every copy that shows up as an
/// expansion candidate is recorded per node, and [`TemporalDag::targets`]
/// reads that record for whichever destination the caller asks about.
///
/// # Example
///
/// ```rust
/// # use tempograph::{TemporalNetwork, TemporalDag, Vertex};
/// # struct Line;
/// # impl TemporalNetwork for Line {
/// #     type Node = u8;
/// #     type Time = u32;
/// #     fn timestamps(&self) -> Vec<u32> { vec![1, 2] }
/// #     fn neighbors(&self, node: &u8, time: u32) -> Vec<u8> {
/// #         if u32::from(*node) == time - 1 { vec![*node + 1] } else { vec![] }
/// #     }
/// #     fn nodes(&self) -> Vec<u8> { vec![0, 1, 2] }
/// # }
/// // 0 -> 1 at snapshot 1, 1 -> 2 at snapshot 2
/// let dag = TemporalDag::build(&Line, &0, &[1, 2]);
///
/// assert_eq!(dag.sources().collect::<Vec<_>>(), vec![&Vertex::Copy(0, 1)]);
/// assert_eq!(dag.targets(&2).collect::<Vec<_>>(), vec![&Vertex::Copy(2, 2)]);
/// assert!(dag.contains_edge(&Vertex::Copy(1, 1), &Vertex::Copy(2, 2)));
/// assert!(dag.is_acyclic());
/// ```
#[derive(Debug, Clone)]
pub struct TemporalDag<N, T> {
    pub(crate) graph: DiGraph<Vertex<N, T>, ()>,
    index: HashMap<Vertex<N, T>, NodeIndex>,
    root: NodeIndex,
    pub(crate) sources: Vec<NodeIndex>,
    pub(crate) arrivals: HashMap<N, Vec<NodeIndex>>,
}

impl<N: NodeId, T: Timestamp> TemporalDag<N, T> {
    /// Builds the DAG rooted at `root` by sweeping `window` once, in order.
    ///
    /// `window` is the resolved snapshot sequence, usually the output of
    /// [`resolve_window`](crate::resolve_window).
    ///
    /// At each snapshot every active vertex asks the network for the neighbors
    /// of its node. Each neighbor `n` becomes the copy `(n, t)`, gets an edge
    /// from the departing vertex and joins the frontier for the next snapshot.
    /// The root departs as the copy `(root, t)`, registered as a source, and
    /// stays active so it can depart again later. Any other vertex with no
    /// neighbors at a snapshot leaves the frontier; its edges stay in the DAG.
    pub fn build<G>(network: &G, root: &N, window: &[T]) -> Self
    where
        G: TemporalNetwork<Node = N, Time = T> + ?Sized,
    {
        let mut dag = Self::with_root(root.clone());
        let mut active = vec![dag.root];
        let mut frontier: HashSet<NodeIndex> = HashSet::from([dag.root]);

        for &time in window {
            let mut discovered = Vec::new();
            let mut exhausted = HashSet::new();

            for &vertex in &active {
                let node = dag.graph[vertex].node().clone();
                let neighbors = network.neighbors(&node, time);

                if neighbors.is_empty() {
                    if vertex != dag.root {
                        exhausted.insert(vertex);
                    }
                    continue;
                }

                let departure = if vertex == dag.root {
                    let departure = dag.add_vertex(Vertex::Copy(node, time));
                    dag.add_source(departure);
                    departure
                } else {
                    vertex
                };

                for neighbor in neighbors {
                    let next = dag.add_vertex(Vertex::Copy(neighbor.clone(), time));
                    // a root copy interacting with itself in its own snapshot
                    if next == departure {
                        continue;
                    }
                    dag.add_arrival(neighbor, next);
                    dag.graph.update_edge(departure, next, ());
                    discovered.push(next);
                }
            }

            for vertex in discovered {
                if frontier.insert(vertex) {
                    active.push(vertex);
                }
            }
            if !exhausted.is_empty() {
                active.retain(|vertex| !exhausted.contains(vertex));
                frontier.retain(|vertex| !exhausted.contains(vertex));
            }
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "temporal DAG from {root:?}: {} snapshots, {} vertices, {} edges, {} sources",
            window.len(),
            dag.graph.node_count(),
            dag.graph.edge_count(),
            dag.sources.len()
        );

        dag
    }

    fn with_root(root: N) -> Self {
        let mut graph = DiGraph::new();
        let vertex = Vertex::Root(root);
        let index = graph.add_node(vertex.clone());
        Self {
            graph,
            index: HashMap::from([(vertex, index)]),
            root: index,
            sources: Vec::new(),
            arrivals: HashMap::new(),
        }
    }

    /// Returns the index of `vertex`, inserting it first if needed.
    fn add_vertex(&mut self, vertex: Vertex<N, T>) -> NodeIndex {
        if let Some(&index) = self.index.get(&vertex) {
            return index;
        }
        let index = self.graph.add_node(vertex.clone());
        self.index.insert(vertex, index);
        index
    }

    fn add_source(&mut self, index: NodeIndex) {
        if !self.sources.contains(&index) {
            self.sources.push(index);
        }
    }

    fn add_arrival(&mut self, node: N, index: NodeIndex) {
        let arrivals = self.arrivals.entry(node).or_default();
        if !arrivals.contains(&index) {
            arrivals.push(index);
        }
    }

    /// Returns the root vertex.
    pub fn root(&self) -> &Vertex<N, T> {
        &self.graph[self.root]
    }

    /// Returns the root's departures, earliest first.
    pub fn sources(&self) -> impl Iterator<Item = &Vertex<N, T>> + '_ {
        self.sources.iter().map(|&index| &self.graph[index])
    }

    /// Returns the copies of `destination` reached during the sweep, earliest first.
    pub fn targets<'a>(
        &'a self,
        destination: &N,
    ) -> impl Iterator<Item = &'a Vertex<N, T>> + use<'a, N, T> {
        self.target_indices(destination)
            .iter()
            .map(|&index| &self.graph[index])
    }

    pub(crate) fn target_indices(&self, destination: &N) -> &[NodeIndex] {
        self.arrivals
            .get(destination)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn index_of(&self, vertex: &Vertex<N, T>) -> Option<NodeIndex> {
        self.index.get(vertex).copied()
    }

    /// Returns `true` if `vertex` is part of the DAG.
    pub fn contains_vertex(&self, vertex: &Vertex<N, T>) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns `true` if the DAG has an edge `from -> to`.
    pub fn contains_edge(&self, from: &Vertex<N, T>, to: &Vertex<N, T>) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(from), Some(to)) => self.graph.contains_edge(from, to),
            _ => false,
        }
    }

    /// Returns an iterator over every edge as a `(from, to)` vertex pair.
    pub fn edges(&self) -> impl Iterator<Item = (&Vertex<N, T>, &Vertex<N, T>)> + '_ {
        self.graph
            .raw_edges()
            .iter()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
    }

    /// Number of vertices, the root included.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the DAG has no directed cycle.
    pub fn is_acyclic(&self) -> bool {
        !petgraph::algo::is_cyclic_directed(&self.graph)
    }
}
