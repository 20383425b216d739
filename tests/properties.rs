//! Property tests over random simple graphs.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use u_indset::climb::{ClimbConfig, ClimbRunner};
use u_indset::graph::{AdjacencyGraph, MutableGraph};
use u_indset::greedy::{is_independent, is_maximal, GreedyBuilder};
use u_indset::sa::{SaConfig, SaRunner};

/// Random simple graph: `n` nodes, up to 80 edges, no self-loops.
fn graph_strategy() -> impl Strategy<Value = AdjacencyGraph<u32>> {
    (1u32..30)
        .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..80)))
        .prop_map(|(n, edges)| {
            let mut graph = AdjacencyGraph::new();
            for node in 0..n {
                graph.add_node(node);
            }
            for (a, b) in edges {
                if a != b {
                    graph.add_edge(a, b);
                }
            }
            graph
        })
}

proptest! {
    #[test]
    fn prop_builder_independent_and_maximal(graph in graph_strategy(), seed in any::<u64>()) {
        let original = graph.clone();
        let set = GreedyBuilder::build(&graph, &mut StdRng::seed_from_u64(seed));

        prop_assert!(is_independent(&graph, &set));
        prop_assert!(is_maximal(&graph, &set));
        prop_assert_eq!(graph, original);
    }

    #[test]
    fn prop_builder_deterministic_for_fixed_order(
        (graph, order) in graph_strategy().prop_flat_map(|g| {
            let nodes = g.nodes();
            (Just(g), Just(nodes).prop_shuffle())
        })
    ) {
        let first = GreedyBuilder::build_with_order(&graph, &order);
        let second = GreedyBuilder::build_with_order(&graph, &order);
        prop_assert_eq!(first.as_slice().first(), order.first());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_climb_bounded_and_monotone(graph in graph_strategy(), seed in any::<u64>()) {
        let result = ClimbRunner::run(&graph, &ClimbConfig::default().with_seed(seed));

        prop_assert!(result.restarts >= 1);
        prop_assert!(result.restarts <= graph.node_count());
        prop_assert!(result.best.len() >= result.size_history[0]);
        prop_assert!(is_independent(&graph, &result.best));
        prop_assert!(is_maximal(&graph, &result.best));
    }

    #[test]
    fn prop_annealing_valid(graph in graph_strategy(), seed in any::<u64>()) {
        let result = SaRunner::run(&graph, &SaConfig::default().with_seed(seed));

        prop_assert!(result.restarts <= graph.node_count());
        prop_assert!(is_independent(&graph, &result.best));
        prop_assert!(is_maximal(&graph, &result.best));
    }

    #[test]
    fn prop_terminates_for_any_decay_sign(
        graph in graph_strategy(),
        probability in -1.0f64..3.0,
        decay in -1.0f64..1.0,
        seed in any::<u64>(),
    ) {
        let config = ClimbConfig::default().with_escape(probability, decay).with_seed(seed);
        let result = ClimbRunner::run(&graph, &config);

        prop_assert!(result.restarts <= graph.node_count());
        prop_assert_eq!(result.size_history.len(), result.restarts);
        prop_assert!(result.escapes < result.restarts.max(1));
    }
}
