use crate::config::CampusMap;
use crate::constants::Weight;
use crate::error::GraphError;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer type for node and edge indices. Any `usize` id maps to a distinct
/// `NodeIndex`, so out of range ids stay out of range.
pub type DefaultIdx = usize;

/// Location identifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Named point of interest on the campus
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Location {
    pub id: NodeIndex,
    pub name: String,
}

/// Undirected connection between two locations. The order of `a` and `b`
/// carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Edge {
    pub a: NodeIndex,
    pub b: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(a: NodeIndex, b: NodeIndex, weight: Weight) -> Self {
        Edge { a, b, weight }
    }

    /// Returns the endpoint opposite to `node_idx`.
    #[inline]
    pub fn other(&self, node_idx: NodeIndex) -> NodeIndex {
        if self.a == node_idx {
            self.b
        } else {
            self.a
        }
    }
}

/// Read-only campus graph. Instances are created through [`GraphBuilder`] or
/// [`Graph::from_config`] and never change afterwards.
#[derive(Debug, Clone)]
pub struct Graph {
    locations: Vec<Location>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeIndex>>,
    names: FxHashMap<String, NodeIndex>,
}

impl Graph {
    /// Builds the graph described by `map`. Location rows may appear in any
    /// order, but their ids must form the range `0..n`.
    pub fn from_config(map: &CampusMap) -> Result<Self, GraphError> {
        let mut locations: Vec<_> = map.locations.iter().collect();
        locations.sort_by_key(|location| location.id);

        let mut builder = GraphBuilder::with_capacity(locations.len(), map.edges.len());
        for location in locations {
            builder.add_location(location.id, &location.name)?;
        }
        for edge in &map.edges {
            builder.add_edge(edge.a, edge.b, edge.weight)?;
        }

        let g = builder.build();
        info!(
            "Graph has {} locations and {} edges",
            g.num_locations(),
            g.num_edges()
        );
        Ok(g)
    }

    /// The built-in campus map.
    pub fn reference() -> Result<Self, GraphError> {
        Self::from_config(&CampusMap::reference())
    }

    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn contains(&self, node_idx: NodeIndex) -> bool {
        node_idx.index() < self.locations.len()
    }

    /// Fails with [`GraphError::UnknownLocation`] if `node_idx` is not part of the graph.
    pub fn check(&self, node_idx: NodeIndex) -> Result<(), GraphError> {
        if self.contains(node_idx) {
            Ok(())
        } else {
            Err(GraphError::UnknownLocation(node_idx.index()))
        }
    }

    pub fn location(&self, node_idx: NodeIndex) -> Option<&Location> {
        self.locations.get(node_idx.index())
    }

    pub fn location_name(&self, node_idx: NodeIndex) -> Result<&str, GraphError> {
        self.location(node_idx)
            .map(|location| location.name.as_str())
            .ok_or(GraphError::UnknownLocation(node_idx.index()))
    }

    /// Looks up a location by its display name, ignoring case and surrounding
    /// whitespace.
    pub fn find_location(&self, name: &str) -> Option<NodeIndex> {
        self.names.get(&normalize(name)).copied()
    }

    /// Returns an iterator over all locations ordered by id
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Weight of the direct edge between `a` and `b`. `None` means there is no
    /// such edge, which is different from a distance of zero.
    pub fn weight(&self, a: NodeIndex, b: NodeIndex) -> Option<Weight> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        self.neighbors(a)
            .find(|(target, _)| *target == b)
            .map(|(_, weight)| weight)
    }

    /// Returns the neighbors of `node_idx` together with the edge weight.
    ///
    /// **Panics** if `node_idx` does not exist
    pub fn neighbors(&self, node_idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.adjacency[node_idx.index()].iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            (edge.other(node_idx), edge.weight)
        })
    }

    pub fn degree(&self, node_idx: NodeIndex) -> usize {
        self.adjacency
            .get(node_idx.index())
            .map_or(0, |edges| edges.len())
    }

    /// Id/name table followed by the full distance matrix, `0` where two
    /// locations are not directly connected.
    pub fn format_matrix(&self) -> String {
        let n = self.num_locations();
        let mut out = String::new();

        for location in self.locations() {
            out.push_str(&format!("{:>3}: {}\n", location.id, location.name));
        }
        out.push('\n');

        out.push_str("    ");
        for col in 0..n {
            out.push_str(&format!("{:>5}", col));
        }
        out.push('\n');
        for row in 0..n {
            out.push_str(&format!("{:>3} ", row));
            for col in 0..n {
                let weight = self.weight(node_index(row), node_index(col)).unwrap_or(0);
                out.push_str(&format!("{:>5}", weight));
            }
            out.push('\n');
        }
        out
    }

    pub fn print_info(&self) {
        println!(
            "CampusGraph:\t#Locations: {}, #Edges: {}",
            self.num_locations(),
            self.num_edges()
        );
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Collects locations and edges, validating every insertion. Consumed by
/// [`GraphBuilder::build`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    locations: Vec<Location>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeIndex>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_locations: usize, num_edges: usize) -> Self {
        Self {
            locations: Vec::with_capacity(num_locations),
            edges: Vec::with_capacity(num_edges),
            adjacency: Vec::with_capacity(num_locations),
        }
    }

    /// Adds a new location. Ids have to be added in order `0, 1, 2, ...`.
    pub fn add_location(&mut self, id: usize, name: &str) -> Result<NodeIndex, GraphError> {
        let expected = self.locations.len();
        if id < expected {
            return Err(GraphError::DuplicateId(id));
        }
        if id > expected {
            return Err(GraphError::NonContiguousId {
                expected,
                found: id,
            });
        }
        if name.trim().is_empty() {
            return Err(GraphError::EmptyName(id));
        }

        let node_idx = NodeIndex::new(id);
        self.adjacency.push(Vec::new());
        self.locations.push(Location {
            id: node_idx,
            name: name.to_string(),
        });

        Ok(node_idx)
    }

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// If the pair is already connected the old weight is replaced (last
    /// write wins) and the index of the existing edge is returned.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: i64) -> Result<EdgeIndex, GraphError> {
        let n = self.locations.len();
        if a >= n || b >= n {
            return Err(GraphError::InvalidReference { a, b });
        }
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        let weight = Weight::try_from(weight)
            .ok()
            .filter(|w| *w > 0)
            .ok_or(GraphError::InvalidWeight { a, b, weight })?;

        let (a, b) = (NodeIndex::new(a), NodeIndex::new(b));

        for edge_idx in &self.adjacency[a.index()] {
            let old_edge = &mut self.edges[edge_idx.index()];
            if old_edge.other(a) == b {
                debug!(
                    "Replacing weight of edge ({}, {}): {} -> {}",
                    a, b, old_edge.weight, weight
                );
                old_edge.weight = weight;
                return Ok(*edge_idx);
            }
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        self.adjacency[a.index()].push(edge_idx);
        self.adjacency[b.index()].push(edge_idx);
        self.edges.push(Edge::new(a, b, weight));

        Ok(edge_idx)
    }

    pub fn build(self) -> Graph {
        let mut names = FxHashMap::default();
        for location in &self.locations {
            names.entry(normalize(&location.name)).or_insert(location.id);
        }

        Graph {
            locations: self.locations,
            edges: self.edges,
            adjacency: self.adjacency,
            names,
        }
    }
}
