//! Single greedy pass.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use super::types::IndependentSet;
use crate::graph::MutableGraph;

/// Builds maximal independent sets by greedy elimination.
pub struct GreedyBuilder;

impl GreedyBuilder {
    /// Runs one pass with a visiting order shuffled by `rng`.
    ///
    /// The input graph is left untouched; the pass consumes a snapshot.
    /// The pass makes O(n + m) graph calls; on [`AdjacencyGraph`] each
    /// costs O(log n), for O((n + m) log n) overall.
    ///
    /// [`AdjacencyGraph`]: crate::graph::AdjacencyGraph
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use u_indset::graph::AdjacencyGraph;
    /// use u_indset::greedy::{is_independent, is_maximal, GreedyBuilder};
    ///
    /// let graph = AdjacencyGraph::from_edges([(1, 2), (2, 3), (3, 4)]);
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let set = GreedyBuilder::build(&graph, &mut rng);
    /// assert!(is_independent(&graph, &set));
    /// assert!(is_maximal(&graph, &set));
    /// ```
    pub fn build<G, R>(graph: &G, rng: &mut R) -> IndependentSet<G::Node>
    where
        G: MutableGraph,
        R: Rng + ?Sized,
    {
        let mut order = graph.nodes();
        order.shuffle(rng);
        Self::build_with_order(graph, &order)
    }

    /// Runs one pass visiting nodes in the given order.
    ///
    /// Deterministic for a fixed graph and order. Nodes in `order` that
    /// are not in the graph are skipped; graph nodes missing from `order`
    /// are visited afterwards in the graph's own order, so the result is
    /// maximal either way.
    pub fn build_with_order<G>(graph: &G, order: &[G::Node]) -> IndependentSet<G::Node>
    where
        G: MutableGraph,
    {
        let mut remaining = graph.snapshot();
        let mut set = IndependentSet::new();

        for node in order {
            take(&mut remaining, node, &mut set);
        }

        // Only reached when `order` did not cover the graph.
        while !remaining.is_empty() {
            let leftovers = remaining.nodes();
            for node in &leftovers {
                take(&mut remaining, node, &mut set);
            }
        }

        trace!("greedy pass selected {} nodes", set.len());
        set
    }
}

/// Selects `node` if still present and eliminates its neighborhood.
fn take<G: MutableGraph>(remaining: &mut G, node: &G::Node, set: &mut IndependentSet<G::Node>) {
    if !remaining.contains(node) {
        return;
    }
    let neighbors = remaining.neighbors(node);
    remaining.remove_node(node);
    remaining.remove_nodes(&neighbors);
    set.push(node.clone());
}
