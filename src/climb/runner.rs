//! Hill-climbing control loop.
//!
//! # Algorithm
//!
//! 1. `best` starts unset
//! 2. Up to `max(node_count, 1)` times:
//!    a. Build a candidate with one greedy pass on a fresh snapshot
//!    b. Adopt it if `best` is unset or the candidate is strictly larger
//!    c. Otherwise, without an escape schedule: stop
//!    d. Otherwise draw `u` in [0, 1); stop if `u` exceeds the current
//!    escape probability, else escape and lower the probability by the
//!    decay rate
//! 3. Return `best`

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{ClimbConfig, EscapeSchedule};
use crate::graph::MutableGraph;
use crate::greedy::{GreedyBuilder, IndependentSet};

/// Why the controller stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// A restart did not improve and no escape schedule was set.
    NoImprovement,
    /// A restart did not improve and the escape draw failed.
    EscapeRejected,
    /// All `node_count` restarts were used.
    RestartBudget,
}

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbResult<N> {
    /// Largest independent set found.
    pub best: IndependentSet<N>,

    /// Number of greedy passes executed.
    pub restarts: usize,

    /// Number of candidates that replaced an existing best.
    pub improvements: usize,

    /// Number of non-improving restarts that were escaped.
    pub escapes: usize,

    /// Escape probability when the run stopped, if a schedule was set.
    pub final_escape_probability: Option<f64>,

    /// Why the run stopped.
    pub stop_reason: StopReason,

    /// Candidate size of every restart, in order.
    pub size_history: Vec<usize>,
}

/// Executes hill climbing with random restarts.
pub struct ClimbRunner;

impl ClimbRunner {
    /// Runs the controller with an RNG derived from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_indset::climb::{ClimbConfig, ClimbRunner};
    /// use u_indset::graph::AdjacencyGraph;
    ///
    /// let graph = AdjacencyGraph::from_edges([("A", "B"), ("B", "C")]);
    /// let result = ClimbRunner::run(&graph, &ClimbConfig::default().with_seed(1));
    /// assert!(result.best.len() >= 1);
    /// assert!(result.restarts <= 3);
    /// ```
    pub fn run<G: MutableGraph>(graph: &G, config: &ClimbConfig) -> ClimbResult<G::Node> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(graph, config.escape, &mut rng)
    }

    /// Runs the controller with a caller-supplied random source.
    ///
    /// The same RNG drives both the greedy visiting orders and the
    /// escape draws.
    pub fn run_with_rng<G, R>(
        graph: &G,
        escape: Option<EscapeSchedule>,
        rng: &mut R,
    ) -> ClimbResult<G::Node>
    where
        G: MutableGraph,
        R: Rng + ?Sized,
    {
        if let Some(schedule) = escape.filter(|schedule| !schedule.is_finite()) {
            warn!(
                "non-finite escape schedule (p = {}, decay = {}); escape draws are meaningless",
                schedule.probability, schedule.decay_rate
            );
        }

        let budget = graph.node_count().max(1);
        let mut probability = escape.map_or(0.0, |schedule| schedule.probability);

        let mut best: Option<IndependentSet<G::Node>> = None;
        let mut restarts = 0usize;
        let mut improvements = 0usize;
        let mut escapes = 0usize;
        let mut size_history = Vec::with_capacity(budget);
        let mut stop_reason = StopReason::RestartBudget;

        for restart in 0..budget {
            let candidate = GreedyBuilder::build(graph, rng);
            restarts += 1;
            size_history.push(candidate.len());

            let best_len = match best.as_ref().map(IndependentSet::len) {
                None => {
                    debug!("restart {restart}: initial set of {}", candidate.len());
                    best = Some(candidate);
                    continue;
                }
                Some(len) => len,
            };

            if candidate.len() > best_len {
                debug!("restart {restart}: improved {best_len} -> {}", candidate.len());
                improvements += 1;
                best = Some(candidate);
                continue;
            }

            let Some(schedule) = escape else {
                debug!("restart {restart}: no improvement, stopping");
                stop_reason = StopReason::NoImprovement;
                break;
            };

            let draw: f64 = rng.random();
            if draw > probability {
                debug!("restart {restart}: draw {draw:.4} > p {probability:.4}, stopping");
                stop_reason = StopReason::EscapeRejected;
                break;
            }

            debug!("restart {restart}: draw {draw:.4} <= p {probability:.4}, escaping");
            escapes += 1;
            probability -= schedule.decay_rate;
        }

        let best = best.unwrap_or_default();
        info!(
            "climb finished: |best| = {}, restarts = {}, escapes = {}, stop = {:?}",
            best.len(),
            restarts,
            escapes,
            stop_reason
        );

        ClimbResult {
            best,
            restarts,
            improvements,
            escapes,
            final_escape_probability: escape.map(|_| probability),
            stop_reason,
            size_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyGraph;
    use crate::greedy::{is_independent, is_maximal};

    fn complete(k: u32) -> AdjacencyGraph<u32> {
        let mut graph = AdjacencyGraph::new();
        for a in 0..k {
            for b in (a + 1)..k {
                graph.add_edge(a, b);
            }
        }
        graph
    }

    fn path_abc() -> AdjacencyGraph<&'static str> {
        AdjacencyGraph::from_edges([("A", "B"), ("B", "C")])
    }

    #[test]
    fn test_pure_climb_stops_at_first_plateau() {
        // Every pass on K5 yields exactly one node, so restart 2 never improves.
        let config = ClimbConfig::default().with_seed(42);
        let result = ClimbRunner::run(&complete(5), &config);

        assert_eq!(result.restarts, 2);
        assert_eq!(result.best.len(), 1);
        assert_eq!(result.stop_reason, StopReason::NoImprovement);
        assert_eq!(result.escapes, 0);
        assert!(result.final_escape_probability.is_none());
    }

    #[test]
    fn test_certain_escape_runs_full_budget() {
        let config = ClimbConfig::default().with_escape(1.0, 0.0).with_seed(42);
        let result = ClimbRunner::run(&complete(5), &config);

        assert_eq!(result.restarts, 5);
        assert_eq!(result.escapes, 4);
        assert_eq!(result.stop_reason, StopReason::RestartBudget);
        assert_eq!(result.final_escape_probability, Some(1.0));
    }

    #[test]
    fn test_negative_probability_never_escapes() {
        let config = ClimbConfig::default().with_escape(-1.0, 0.2).with_seed(42);
        let result = ClimbRunner::run(&complete(5), &config);

        assert_eq!(result.restarts, 2);
        assert_eq!(result.escapes, 0);
        assert_eq!(result.stop_reason, StopReason::EscapeRejected);
    }

    #[test]
    fn test_decay_applies_only_on_escape() {
        let config = ClimbConfig::default().with_escape(1.5, 0.1).with_seed(3);
        let result = ClimbRunner::run(&complete(4), &config);

        // 3 non-improving restarts, each escaped since p stays >= 1.2.
        assert_eq!(result.escapes, 3);
        let p = result.final_escape_probability.unwrap();
        assert!((p - 1.2).abs() < 1e-9, "got {p}");
    }

    #[test]
    fn test_fractional_probability_mixes_escape_and_stop() {
        let graph = complete(8);
        let mut rejected = 0;
        let mut escaped = 0;
        for seed in 0..50 {
            let config = ClimbConfig::default().with_escape(0.5, 0.0).with_seed(seed);
            let result = ClimbRunner::run(&graph, &config);
            if result.stop_reason == StopReason::EscapeRejected {
                rejected += 1;
            }
            escaped += result.escapes;
            assert!(result.restarts <= 8);
            assert_eq!(result.final_escape_probability, Some(0.5));
        }
        assert!(rejected > 0, "no run ever stopped on a failed draw");
        assert!(escaped > 0, "no run ever escaped");
    }

    #[test]
    fn test_non_finite_schedule_still_bounded() {
        let config = ClimbConfig::default().with_escape(f64::NAN, 0.2).with_seed(4);
        let result = ClimbRunner::run(&complete(5), &config);

        assert!(result.restarts <= 5);
        assert_eq!(result.best.len(), 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_decay_still_terminates() {
        let config = ClimbConfig::default().with_escape(1.0, -0.5).with_seed(8);
        let result = ClimbRunner::run(&complete(12), &config);

        assert_eq!(result.restarts, 12);
        assert_eq!(result.stop_reason, StopReason::RestartBudget);
        assert!(result.final_escape_probability.unwrap() > 1.0);
    }

    #[test]
    fn test_empty_graph_returns_empty_set() {
        let graph: AdjacencyGraph<u32> = AdjacencyGraph::new();
        let result = ClimbRunner::run(&graph, &ClimbConfig::default().with_seed(1));

        assert!(result.best.is_empty());
        assert_eq!(result.restarts, 1);
        assert_eq!(result.stop_reason, StopReason::RestartBudget);
    }

    #[test]
    fn test_single_node() {
        let mut graph = AdjacencyGraph::new();
        graph.add_node("solo");
        let result = ClimbRunner::run(&graph, &ClimbConfig::default().with_seed(1));

        assert_eq!(result.best.into_vec(), vec!["solo"]);
        assert_eq!(result.restarts, 1);
    }

    #[test]
    fn test_never_worse_than_first_candidate() {
        let graph = path_abc();
        for seed in 0..50 {
            let result = ClimbRunner::run(&graph, &ClimbConfig::default().with_seed(seed));
            assert!(result.best.len() >= result.size_history[0]);
            assert!(result.restarts <= graph.node_count());
            assert_eq!(result.best.len(), *result.size_history.iter().max().unwrap());
        }
    }

    #[test]
    fn test_path_keeps_leaves_once_found() {
        let graph = path_abc();
        for seed in 0..50 {
            let result = ClimbRunner::run(&graph, &ClimbConfig::default().with_seed(seed));
            if result.size_history.contains(&2) {
                let mut best = result.best.into_vec();
                best.sort();
                assert_eq!(best, vec!["A", "C"]);
            }
        }
    }

    #[test]
    fn test_seeded_runs_reproducible() {
        let graph = AdjacencyGraph::from_edges((0..30u32).map(|i| (i, (i * 7 + 3) % 30)));
        let config = ClimbConfig::default().with_escape(2.0, 0.2).with_seed(77);
        let a = ClimbRunner::run(&graph, &config);
        let b = ClimbRunner::run(&graph, &config);

        assert_eq!(a.best, b.best);
        assert_eq!(a.size_history, b.size_history);
        assert_eq!(a.stop_reason, b.stop_reason);
    }

    #[test]
    fn test_result_is_valid_set() {
        let graph = AdjacencyGraph::from_edges((0..40u32).map(|i| (i, (i * 13 + 5) % 40)));
        let config = ClimbConfig::default().with_escape(2.0, 0.2).with_seed(5);
        let result = ClimbRunner::run(&graph, &config);

        assert!(is_independent(&graph, &result.best));
        assert!(is_maximal(&graph, &result.best));
    }
}
