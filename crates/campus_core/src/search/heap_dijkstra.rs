use std::collections::BinaryHeap;

use crate::constants::{Weight, UNREACHABLE};
use crate::error::GraphError;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

// Reversed so that `BinaryHeap` pops the smallest weight first and, on equal
// weights, the lowest node id.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm on a binary heap. Settles nodes in the same order as
/// [`Dijkstra`](super::dijkstra::Dijkstra) and therefore returns the same paths.
pub struct HeapDijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> HeapDijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        HeapDijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) -> Result<ShortestPath, GraphError> {
        self.g.check(source)?;
        self.g.check(target)?;

        self.stats.init();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(ShortestPath::new(vec![source], 0));
        }

        let n = self.g.num_locations();
        let mut dist: Vec<Weight> = vec![UNREACHABLE; n];
        let mut settled = vec![false; n];
        let mut parent: Vec<Option<NodeIndex>> = vec![None; n];

        dist[source.index()] = 0;

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0));

        while let Some(Candidate { node_idx, weight }) = queue.pop() {
            // Stale entry
            if settled[node_idx.index()] {
                continue;
            }
            settled[node_idx.index()] = true;
            self.stats.nodes_settled += 1;

            if node_idx == target {
                break;
            }

            for (v, edge_weight) in self.g.neighbors(node_idx) {
                if settled[v.index()] {
                    continue;
                }
                let new_distance = weight.saturating_add(edge_weight);
                if new_distance < dist[v.index()] {
                    dist[v.index()] = new_distance;
                    parent[v.index()] = Some(node_idx);
                    queue.push(Candidate::new(v, new_distance));
                }
            }
        }
        self.stats.finish();

        let sp = super::reconstruct_path(target, source, &dist, &parent);
        if sp.is_reachable() {
            debug!("Path found: {:?}", sp);
            info!("Path found: {}", self.stats);
        } else {
            info!("No path found: {}", self.stats);
        }

        Ok(sp)
    }
}

#[cfg(test)]
mod tests {
    use crate::search::{assert_no_path, assert_path, dijkstra::Dijkstra};

    use super::*;
    use crate::util::test_graphs::builder_with_locations;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn candidates_pop_by_weight_then_id() {
        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(node_index(9), 125));
        queue.push(Candidate::new(node_index(3), 200));
        queue.push(Candidate::new(node_index(8), 125));
        queue.push(Candidate::new(node_index(1), 19));

        let order: Vec<_> = std::iter::from_fn(|| queue.pop())
            .map(|c| c.node_idx.index())
            .collect();

        assert_eq!(order, vec![1, 8, 9, 3]);
    }

    #[test]
    fn reference_routes() {
        init_log();
        let g = Graph::reference().unwrap();
        let mut d = HeapDijkstra::new(&g);

        assert_path(
            vec![0, 1, 2, 10, 11, 12, 14],
            287,
            d.search(node_index(0), node_index(14)),
        );
        assert_path(vec![18, 0], 24, d.search(node_index(18), node_index(0)));
        assert_path(vec![19, 21], 308, d.search(node_index(19), node_index(21)));
        assert_path(vec![2, 8, 7], 125, d.search(node_index(2), node_index(7)));
    }

    #[test]
    fn isolated_location() {
        let mut b = builder_with_locations(3);
        b.add_edge(0, 1, 4).unwrap();
        let g = b.build();

        let mut d = HeapDijkstra::new(&g);

        assert_no_path(d.search(node_index(2), node_index(0)));
        assert_no_path(d.search(node_index(0), node_index(2)));
        assert_eq!(
            d.search(node_index(3), node_index(0)),
            Err(GraphError::UnknownLocation(3))
        );
        assert_eq!(
            d.search(node_index(0), node_index(u32::MAX as usize + 2)),
            Err(GraphError::UnknownLocation(u32::MAX as usize + 2))
        );
    }

    #[test]
    fn same_paths_as_linear_scan() {
        init_log();
        let g = Graph::reference().unwrap();
        let n = g.num_locations();

        for a in 0..n {
            for b in 0..n {
                let linear = Dijkstra::new(&g).search(a.into(), b.into());
                let heap = HeapDijkstra::new(&g).search(a.into(), b.into());
                assert_eq!(linear, heap, "{a} -> {b}");
            }
        }
    }
}
