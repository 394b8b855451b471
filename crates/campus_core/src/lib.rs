//! Crate to answer shortest walking route queries on a campus map.
//!
//! # Basic usage
//! ```
//! use campus_core::prelude::*;
//!
//! // Build the graph from the built-in campus map
//! let g = Graph::reference().expect("Reference campus map is valid");
//!
//! // Create a new Dijkstra instance on top of the graph
//! let mut dijkstra = search::dijkstra::Dijkstra::new(&g);
//!
//! // Tuck Shop -> Quick Bite Cafe
//! let sp = dijkstra.search(node_index(0), node_index(14)).unwrap();
//! assert_eq!(sp.weight, 287);
//!```
//! [`Graph`]: crate::graph::Graph
pub mod config;
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
