//! Greedy maximal independent set construction.
//!
//! One pass over a snapshot of the graph: visit nodes in a shuffled
//! order, take every node that is still present, and delete it together
//! with its neighbors. The result is always independent and maximal, but
//! not necessarily of maximum cardinality; repeated passes with different
//! visiting orders explore different maximal sets.

mod builder;
mod types;
mod verify;

pub use builder::GreedyBuilder;
pub use types::IndependentSet;
pub use verify::{is_independent, is_maximal};
