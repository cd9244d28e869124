//! Snapshot fixture for unit tests.

use crate::integration::TemporalNetwork;
use std::collections::{BTreeMap, BTreeSet};

/// Minimal network: snapshot -> node -> neighbors.
pub(crate) struct Snapshots {
    adjacency: BTreeMap<u32, BTreeMap<char, BTreeSet<char>>>,
    nodes: BTreeSet<char>,
}

impl Snapshots {
    pub(crate) fn directed(edges: &[(char, char, u32)]) -> Self {
        Self::build(edges, false)
    }

    pub(crate) fn undirected(edges: &[(char, char, u32)]) -> Self {
        Self::build(edges, true)
    }

    fn build(edges: &[(char, char, u32)], symmetric: bool) -> Self {
        let mut adjacency: BTreeMap<u32, BTreeMap<char, BTreeSet<char>>> = BTreeMap::new();
        let mut nodes = BTreeSet::new();
        for &(u, v, t) in edges {
            let snapshot = adjacency.entry(t).or_default();
            snapshot.entry(u).or_default().insert(v);
            if symmetric {
                snapshot.entry(v).or_default().insert(u);
            }
            nodes.insert(u);
            nodes.insert(v);
        }
        Self { adjacency, nodes }
    }
}

impl TemporalNetwork for Snapshots {
    type Node = char;
    type Time = u32;

    fn timestamps(&self) -> Vec<u32> {
        self.adjacency.keys().copied().collect()
    }

    fn neighbors(&self, node: &char, time: u32) -> Vec<char> {
        self.adjacency
            .get(&time)
            .and_then(|snapshot| snapshot.get(node))
            .map(|targets| targets.iter().copied().collect())
            .unwrap_or_default()
    }

    fn nodes(&self) -> Vec<char> {
        self.nodes.iter().copied().collect()
    }
}
