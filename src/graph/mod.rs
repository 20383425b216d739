//! Graph handle used by the search.
//!
//! The search core only needs a mutable-graph capability set: add nodes
//! and edges, list nodes, list neighbors, remove nodes, and take an
//! independent snapshot. [`MutableGraph`] captures that contract;
//! [`AdjacencyGraph`] is the provided implementation, and
//! [`load_edge_list`] populates one from a tab-separated edge-list file.

mod adjacency;
mod loader;
mod types;

pub use adjacency::AdjacencyGraph;
pub use loader::{load_edge_list, parse_edge_list};
pub use types::MutableGraph;
