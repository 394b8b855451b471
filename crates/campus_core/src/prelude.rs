//! Re-exports of the most commonly used items in `campus_core`.
pub use crate::config::CampusMap;
pub use crate::constants::{Weight, UNREACHABLE};
pub use crate::error::GraphError;

pub use crate::search;
pub use crate::search::shortest_path::ShortestPath;
pub use crate::search::Engine;

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::graph::GraphBuilder;
pub use crate::graph::NodeIndex;
