//! SA execution: delegates to the hill-climbing controller.

use rand::Rng;

use super::config::SaConfig;
use crate::climb::{ClimbConfig, ClimbResult, ClimbRunner};
use crate::graph::MutableGraph;

/// Executes simulated annealing.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with an RNG derived from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_indset::graph::AdjacencyGraph;
    /// use u_indset::greedy::is_independent;
    /// use u_indset::sa::{SaConfig, SaRunner};
    ///
    /// let graph = AdjacencyGraph::from_edges([(1, 2), (2, 3), (3, 4), (4, 1)]);
    /// let result = SaRunner::run(&graph, &SaConfig::default().with_seed(3));
    /// assert!(is_independent(&graph, &result.best));
    /// ```
    pub fn run<G: MutableGraph>(graph: &G, config: &SaConfig) -> ClimbResult<G::Node> {
        ClimbRunner::run(graph, &ClimbConfig::from(config))
    }

    /// Runs SA with a caller-supplied random source. `config.seed` is ignored.
    pub fn run_with_rng<G, R>(graph: &G, config: &SaConfig, rng: &mut R) -> ClimbResult<G::Node>
    where
        G: MutableGraph,
        R: Rng + ?Sized,
    {
        ClimbRunner::run_with_rng(graph, Some(config.schedule()), rng)
    }
}
