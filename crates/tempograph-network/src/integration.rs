//! [`TemporalNetwork`] implementation for [`DynamicNetwork`].

use crate::network::DynamicNetwork;
use tempograph::{NodeId, TemporalNetwork, Timestamp};

impl<N: NodeId, T: Timestamp> TemporalNetwork for DynamicNetwork<N, T> {
    type Node = N;
    type Time = T;

    fn timestamps(&self) -> Vec<T> {
        DynamicNetwork::timestamps(self)
    }

    fn neighbors(&self, node: &N, time: T) -> Vec<N> {
        DynamicNetwork::neighbors(self, node, time)
    }

    fn nodes(&self) -> Vec<N> {
        DynamicNetwork::nodes(self)
    }
}
