//! Core trait for the graph handle.

use std::fmt::Debug;

/// An undirected graph the search can query and consume.
///
/// The greedy builder mutates a [`snapshot`](MutableGraph::snapshot) of
/// the caller's graph, never the graph itself, so restarts can run any
/// number of times against the same loaded input.
///
/// # Snapshot contract
///
/// `snapshot` must return an independent graph: mutations to the
/// snapshot are never observable through the original, and vice versa.
///
/// # Examples
///
/// ```
/// use u_indset::graph::{AdjacencyGraph, MutableGraph};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_edge("a", "b");
/// let mut copy = graph.snapshot();
/// copy.remove_node(&"a");
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(copy.node_count(), 1);
/// ```
pub trait MutableGraph {
    /// Node identifier type.
    type Node: Clone + Eq + Debug;

    /// Inserts an isolated node. No-op if already present.
    fn add_node(&mut self, node: Self::Node);

    /// Inserts an undirected edge, adding missing endpoints.
    fn add_edge(&mut self, a: Self::Node, b: Self::Node);

    /// Number of nodes currently in the graph.
    fn node_count(&self) -> usize;

    /// Number of undirected edges currently in the graph.
    fn edge_count(&self) -> usize;

    /// All nodes, in the graph's iteration order.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Returns `true` if `node` is present.
    fn contains(&self, node: &Self::Node) -> bool;

    /// Current neighbors of `node`. Empty if the node is absent.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Returns `true` if an edge joins `a` and `b`.
    fn are_adjacent(&self, a: &Self::Node, b: &Self::Node) -> bool;

    /// Removes `node` and every edge incident to it. No-op if absent.
    fn remove_node(&mut self, node: &Self::Node);

    /// Removes every node in `nodes`.
    fn remove_nodes(&mut self, nodes: &[Self::Node]) {
        for node in nodes {
            self.remove_node(node);
        }
    }

    /// Returns an independent copy of this graph.
    fn snapshot(&self) -> Self
    where
        Self: Sized;

    /// Returns `true` if the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
