//! Ordered adjacency-set graph.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use super::types::MutableGraph;

/// Undirected graph stored as an ordered map from node to neighbor set.
///
/// Node iteration order is the node identifiers' `Ord` order, so runs
/// with a fixed seed are reproducible across processes. Edges are
/// deduplicated; self-loops are stored as given and not rejected.
/// Lookups, insertions and removals cost O(log n).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyGraph<N: Ord> {
    adjacency: BTreeMap<N, BTreeSet<N>>,
    edges: usize,
}

impl<N: Ord> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            edges: 0,
        }
    }
}

impl<N: Ord + Clone + Debug> AdjacencyGraph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an edge list.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b);
        }
        graph
    }

    /// Degree of `node`, or `None` if absent.
    pub fn degree(&self, node: &N) -> Option<usize> {
        self.adjacency.get(node).map(BTreeSet::len)
    }
}

impl<N: Ord + Clone + Debug> MutableGraph for AdjacencyGraph<N> {
    type Node = N;

    fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    fn add_edge(&mut self, a: N, b: N) {
        let inserted = self.adjacency.entry(a.clone()).or_default().insert(b.clone());
        self.adjacency.entry(b).or_default().insert(a);
        if inserted {
            self.edges += 1;
        }
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn nodes(&self) -> Vec<N> {
        self.adjacency.keys().cloned().collect()
    }

    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.adjacency
            .get(node)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn are_adjacent(&self, a: &N, b: &N) -> bool {
        self.adjacency.get(a).is_some_and(|set| set.contains(b))
    }

    fn remove_node(&mut self, node: &N) {
        let Some(neighbors) = self.adjacency.remove(node) else {
            return;
        };
        self.edges -= neighbors.len();
        for neighbor in &neighbors {
            if let Some(set) = self.adjacency.get_mut(neighbor) {
                set.remove(node);
            }
        }
    }

    fn snapshot(&self) -> Self {
        self.clone()
    }
}
