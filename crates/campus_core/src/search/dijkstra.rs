use crate::constants::{Weight, UNREACHABLE};
use crate::error::GraphError;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};

/// Dijkstra's algorithm with a linear scan for the next node to settle.
///
/// On equal distances the node with the lowest id is settled first, so the
/// returned path is the same on every run even if several shortest paths
/// exist.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
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
        let mut visited = vec![false; n];
        let mut parent: Vec<Option<NodeIndex>> = vec![None; n];

        dist[source.index()] = 0;

        for _ in 1..n {
            let Some(u) = closest_unvisited(&dist, &visited) else {
                break;
            };

            visited[u.index()] = true;
            self.stats.nodes_settled += 1;

            if u == target {
                break;
            }

            for (v, weight) in self.g.neighbors(u) {
                if visited[v.index()] {
                    continue;
                }
                let new_distance = dist[u.index()].saturating_add(weight);
                if new_distance < dist[v.index()] {
                    dist[v.index()] = new_distance;
                    parent[v.index()] = Some(u);
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

/// First unvisited node with the smallest finite distance, scanning in id order.
fn closest_unvisited(dist: &[Weight], visited: &[bool]) -> Option<NodeIndex> {
    let mut best: Option<(usize, Weight)> = None;
    for (v, (&d, &done)) in dist.iter().zip(visited).enumerate() {
        if done || d == UNREACHABLE {
            continue;
        }
        if best.map_or(true, |(_, min)| d < min) {
            best = Some((v, d));
        }
    }
    best.map(|(v, _)| node_index(v))
}
