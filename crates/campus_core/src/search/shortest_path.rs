use crate::{
    constants::{Weight, UNREACHABLE},
    graph::NodeIndex,
};

/// Result of a single route query.
///
/// An unreachable target is reported with `weight == UNREACHABLE` and an
/// empty `nodes` list.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn unreachable() -> Self {
        ShortestPath {
            nodes: Vec::new(),
            weight: UNREACHABLE,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Total distance, `None` if the target cannot be reached.
    pub fn distance(&self) -> Option<Weight> {
        self.is_reachable().then_some(self.weight)
    }
}
