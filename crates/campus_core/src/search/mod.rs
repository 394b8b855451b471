use crate::{
    constants::{Weight, UNREACHABLE},
    error::GraphError,
    graph::{Graph, NodeIndex},
    statistics::SearchStats,
};

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod heap_dijkstra;
pub mod shortest_path;

/// Available shortest path implementations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Engine {
    /// O(n²) Dijkstra with a linear minimum scan
    #[default]
    Linear,
    /// Dijkstra on a binary heap
    Heap,
}

impl Engine {
    pub fn search(
        self,
        g: &Graph,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<(ShortestPath, SearchStats), GraphError> {
        match self {
            Engine::Linear => {
                let mut d = dijkstra::Dijkstra::new(g);
                let sp = d.search(source, target)?;
                Ok((sp, d.stats))
            }
            Engine::Heap => {
                let mut d = heap_dijkstra::HeapDijkstra::new(g);
                let sp = d.search(source, target)?;
                Ok((sp, d.stats))
            }
        }
    }
}

/// Walks the `parent` pointers back from `target` and returns the path in
/// travel order. `dist[target] == UNREACHABLE` yields an unreachable result.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    dist: &[Weight],
    parent: &[Option<NodeIndex>],
) -> ShortestPath {
    let weight = dist[target.index()];
    if weight == UNREACHABLE {
        return ShortestPath::unreachable();
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(prev_node) = parent[current.index()] {
        path.push(prev_node);
        current = prev_node;
    }
    debug_assert_eq!(current, source, "parent chain must end at the source");

    path.reverse();
    ShortestPath::new(path, weight)
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Result<ShortestPath, GraphError>) {
    assert_eq!(Ok(ShortestPath::unreachable()), path);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: Weight,
    path: Result<ShortestPath, GraphError>,
) {
    let expected_path = expected_path
        .into_iter()
        .map(crate::graph::node_index)
        .collect();
    assert_eq!(Ok(ShortestPath::new(expected_path, expected_weight)), path);
}
