//! Snapshot-indexed network with bidirectional adjacency.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use tempograph::{Interaction, NodeId, Timestamp};

/// Whether interactions have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directedness {
    /// `(u, v, t)` lets `u` reach `v` only.
    Directed,
    /// `(u, v, t)` lets `u` and `v` reach each other.
    Undirected,
}

/// Adjacency of a single snapshot.
///
/// `forward` maps a source to its targets and `reverse` a target to its
/// sources. Undirected interactions are stored once, in canonical order.
#[derive(Debug, Clone)]
struct Snapshot<N> {
    forward: HashMap<N, BTreeSet<N>>,
    reverse: HashMap<N, BTreeSet<N>>,
    interactions: usize,
}

impl<N: NodeId> Snapshot<N> {
    fn new() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
            interactions: 0,
        }
    }

    fn insert(&mut self, source: N, target: N) -> bool {
        let inserted = self
            .forward
            .entry(source.clone())
            .or_default()
            .insert(target.clone());
        if inserted {
            self.reverse.entry(target).or_default().insert(source);
            self.interactions += 1;
        }
        inserted
    }

    fn remove(&mut self, source: &N, target: &N) -> bool {
        let removed = remove_from(&mut self.forward, source, target);
        if removed {
            remove_from(&mut self.reverse, target, source);
            self.interactions -= 1;
        }
        removed
    }

    fn contains(&self, source: &N, target: &N) -> bool {
        self.forward
            .get(source)
            .is_some_and(|targets| targets.contains(target))
    }

    fn targets(&self, source: &N) -> impl Iterator<Item = &N> {
        self.forward.get(source).into_iter().flatten()
    }

    fn sources(&self, target: &N) -> impl Iterator<Item = &N> {
        self.reverse.get(target).into_iter().flatten()
    }
}

fn remove_from<N: NodeId>(index: &mut HashMap<N, BTreeSet<N>>, key: &N, value: &N) -> bool {
    let Some(values) = index.get_mut(key) else {
        return false;
    };
    let removed = values.remove(value);
    if values.is_empty() {
        index.remove(key);
    }
    removed
}

/// A time-evolving network held in memory.
///
/// Interactions are grouped by snapshot. A snapshot exists exactly as long as
/// it holds at least one interaction. Nodes, once registered (explicitly or
/// through an interaction), stay registered.
///
/// # Example
///
/// ```rust
/// use tempograph_network::DynamicNetwork;
///
/// let mut network = DynamicNetwork::undirected();
/// network.add_interaction(1, 2, 10);
/// network.add_interaction(2, 3, 20);
///
/// assert_eq!(network.neighbors(&2, 10), vec![1]);
/// assert_eq!(network.neighbors(&2, 20), vec![3]);
/// assert_eq!(network.timestamps(), vec![10, 20]);
/// ```
#[derive(Debug, Clone)]
pub struct DynamicNetwork<N, T> {
    directedness: Directedness,
    snapshots: BTreeMap<T, Snapshot<N>>,
    nodes: BTreeSet<N>,
}

impl<N: NodeId, T: Timestamp> DynamicNetwork<N, T> {
    /// Creates an empty network.
    pub fn new(directedness: Directedness) -> Self {
        Self {
            directedness,
            snapshots: BTreeMap::new(),
            nodes: BTreeSet::new(),
        }
    }

    /// Creates an empty directed network.
    pub fn directed() -> Self {
        Self::new(Directedness::Directed)
    }

    /// Creates an empty undirected network.
    pub fn undirected() -> Self {
        Self::new(Directedness::Undirected)
    }

    /// Returns whether interactions have a direction.
    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    /// Returns `true` for directed networks.
    pub fn is_directed(&self) -> bool {
        self.directedness == Directedness::Directed
    }

    /// Registers a node without any interaction.
    pub fn add_node(&mut self, node: N) {
        self.nodes.insert(node);
    }

    /// Adds the interaction `(source, target, time)`.
    ///
    /// Returns `false` if it was already present. In undirected networks
    /// `(u, v, t)` and `(v, u, t)` are the same interaction.
    pub fn add_interaction(&mut self, source: N, target: N, time: T) -> bool {
        self.nodes.insert(source.clone());
        self.nodes.insert(target.clone());
        let (source, target) = self.orient(source, target);
        self.snapshots
            .entry(time)
            .or_insert_with(Snapshot::new)
            .insert(source, target)
    }

    /// Adds many interactions at once.
    ///
    /// # Returns
    ///
    /// The number of interactions that were not already present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tempograph_network::DynamicNetwork;
    ///
    /// let mut network = DynamicNetwork::directed();
    /// let added = network.add_interactions_batch([("a", "b", 1), ("b", "c", 2), ("a", "b", 1)]);
    /// assert_eq!(added, 2);
    /// assert_eq!(network.len(), 2);
    /// ```
    pub fn add_interactions_batch<I>(&mut self, interactions: I) -> usize
    where
        I: IntoIterator<Item = (N, N, T)>,
    {
        let mut added = 0;
        for (source, target, time) in interactions {
            if self.add_interaction(source, target, time) {
                added += 1;
            }
        }
        added
    }

    /// Removes the interaction `(source, target, time)`.
    ///
    /// Returns `false` if it was not present. Removing the last interaction
    /// of a snapshot removes the snapshot's timestamp.
    pub fn remove_interaction(&mut self, source: &N, target: &N, time: T) -> bool {
        let (source, target) = self.orient_ref(source, target);
        let Some(snapshot) = self.snapshots.get_mut(&time) else {
            return false;
        };
        let removed = snapshot.remove(source, target);
        if snapshot.interactions == 0 {
            self.snapshots.remove(&time);
        }
        removed
    }

    /// Returns `true` if the interaction `(source, target, time)` is present.
    pub fn has_interaction(&self, source: &N, target: &N, time: T) -> bool {
        let (source, target) = self.orient_ref(source, target);
        self.snapshots
            .get(&time)
            .is_some_and(|snapshot| snapshot.contains(source, target))
    }

    /// Returns the nodes `node` can reach in one hop at `time`, sorted.
    ///
    /// Directed networks return out-neighbors; undirected networks return
    /// every node sharing an interaction with `node`.
    pub fn neighbors(&self, node: &N, time: T) -> Vec<N> {
        match self.directedness {
            Directedness::Directed => self.out_neighbors(node, time),
            Directedness::Undirected => {
                let Some(snapshot) = self.snapshots.get(&time) else {
                    return Vec::new();
                };
                snapshot
                    .targets(node)
                    .chain(snapshot.sources(node))
                    .cloned()
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            }
        }
    }

    /// Returns the targets of interactions leaving `node` at `time`, sorted.
    ///
    /// Same as [`DynamicNetwork::neighbors`] for undirected networks.
    pub fn out_neighbors(&self, node: &N, time: T) -> Vec<N> {
        if !self.is_directed() {
            return self.neighbors(node, time);
        }
        self.snapshots
            .get(&time)
            .map(|snapshot| snapshot.targets(node).cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the sources of interactions arriving at `node` at `time`, sorted.
    ///
    /// Same as [`DynamicNetwork::neighbors`] for undirected networks.
    pub fn in_neighbors(&self, node: &N, time: T) -> Vec<N> {
        if !self.is_directed() {
            return self.neighbors(node, time);
        }
        self.snapshots
            .get(&time)
            .map(|snapshot| snapshot.sources(node).cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the interactions of one snapshot, sorted by source then target.
    pub fn interactions_at(&self, time: T) -> Vec<Interaction<N, T>> {
        let Some(snapshot) = self.snapshots.get(&time) else {
            return Vec::new();
        };
        let mut interactions: Vec<_> = snapshot
            .forward
            .iter()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |target| Interaction::new(source.clone(), target.clone(), time))
            })
            .collect();
        interactions.sort();
        interactions
    }

    /// Returns an iterator over every interaction, snapshot by snapshot.
    ///
    /// Undirected interactions are reported once.
    pub fn all_interactions(&self) -> impl Iterator<Item = Interaction<N, T>> + '_ {
        self.snapshots
            .keys()
            .flat_map(|&time| self.interactions_at(time))
    }

    /// Returns every snapshot timestamp, sorted and deduplicated.
    pub fn timestamps(&self) -> Vec<T> {
        self.snapshots.keys().copied().collect()
    }

    /// Returns every registered node, sorted.
    pub fn nodes(&self) -> Vec<N> {
        self.nodes.iter().cloned().collect()
    }

    /// Returns `true` if `node` is registered.
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Returns the number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of snapshots holding at least one interaction.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns the number of interactions across all snapshots.
    pub fn len(&self) -> usize {
        self.snapshots
            .values()
            .map(|snapshot| snapshot.interactions)
            .sum()
    }

    /// Returns `true` if the network has no interactions.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn orient(&self, source: N, target: N) -> (N, N) {
        if self.directedness == Directedness::Undirected && target < source {
            (target, source)
        } else {
            (source, target)
        }
    }

    fn orient_ref<'a>(&self, source: &'a N, target: &'a N) -> (&'a N, &'a N) {
        if self.directedness == Directedness::Undirected && target < source {
            (target, source)
        } else {
            (source, target)
        }
    }
}

impl<N: NodeId, T: Timestamp> Default for DynamicNetwork<N, T> {
    fn default() -> Self {
        Self::directed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_adjacency() {
        let mut network = DynamicNetwork::directed();
        assert!(network.add_interaction('a', 'b', 1));
        assert!(network.add_interaction('a', 'c', 1));
        assert!(network.add_interaction('c', 'b', 1));

        assert_eq!(network.neighbors(&'a', 1), vec!['b', 'c']);
        assert_eq!(network.out_neighbors(&'b', 1), Vec::<char>::new());
        assert_eq!(network.in_neighbors(&'b', 1), vec!['a', 'c']);
        assert!(network.neighbors(&'a', 2).is_empty());
    }

    #[test]
    fn test_undirected_adjacency() {
        let mut network = DynamicNetwork::undirected();
        network.add_interaction('b', 'a', 1);
        network.add_interaction('b', 'c', 1);

        assert_eq!(network.neighbors(&'a', 1), vec!['b']);
        assert_eq!(network.neighbors(&'b', 1), vec!['a', 'c']);
        assert_eq!(network.in_neighbors(&'b', 1), network.out_neighbors(&'b', 1));
    }

    #[test]
    fn test_undirected_orientation_is_ignored() {
        let mut network = DynamicNetwork::undirected();
        assert!(network.add_interaction('a', 'b', 3));
        assert!(!network.add_interaction('b', 'a', 3));
        assert_eq!(network.len(), 1);
        assert!(network.has_interaction(&'b', &'a', 3));
        assert!(network.remove_interaction(&'b', &'a', 3));
        assert!(network.is_empty());
    }

    #[test]
    fn test_directed_orientation_matters() {
        let mut network = DynamicNetwork::directed();
        network.add_interaction('a', 'b', 3);
        assert!(network.add_interaction('b', 'a', 3));
        assert!(!network.has_interaction(&'a', &'b', 4));
        assert_eq!(network.len(), 2);
    }

    #[test]
    fn test_timestamps_sorted_and_deduplicated() {
        let mut network = DynamicNetwork::directed();
        network.add_interactions_batch([('a', 'b', 5), ('b', 'c', 2), ('c', 'a', 5), ('a', 'c', 9)]);
        assert_eq!(network.timestamps(), vec![2, 5, 9]);
        assert_eq!(network.snapshot_count(), 3);
    }

    #[test]
    fn test_remove_drops_empty_snapshot() {
        let mut network = DynamicNetwork::directed();
        network.add_interaction('a', 'b', 1);
        network.add_interaction('a', 'b', 2);

        assert!(network.remove_interaction(&'a', &'b', 1));
        assert!(!network.remove_interaction(&'a', &'b', 1));
        assert_eq!(network.timestamps(), vec![2]);
        assert!(network.in_neighbors(&'b', 1).is_empty());
        // nodes stay registered
        assert_eq!(network.nodes(), vec!['a', 'b']);
    }

    #[test]
    fn test_isolated_nodes() {
        let mut network: DynamicNetwork<char, u32> = DynamicNetwork::default();
        network.add_node('z');
        assert!(network.contains_node(&'z'));
        assert_eq!(network.node_count(), 1);
        assert!(network.is_empty());
        assert!(network.timestamps().is_empty());
    }

    #[test]
    fn test_interaction_listing() {
        let mut network = DynamicNetwork::undirected();
        network.add_interactions_batch([('c', 'a', 2), ('b', 'a', 1), ('a', 'd', 2)]);

        assert_eq!(
            network.interactions_at(2),
            vec![Interaction::new('a', 'c', 2), Interaction::new('a', 'd', 2)]
        );
        let all: Vec<_> = network.all_interactions().collect();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], Interaction::new('a', 'b', 1));
    }
}
