//! Large independent sets through randomized local search.
//!
//! Provides two heuristics for the maximum independent set problem:
//!
//! - **Hill climbing**: repeated greedy passes from shuffled starting
//!   orders, stopping at the first pass that does not beat the best set.
//! - **Simulated annealing**: the same restarts, but a non-improving pass
//!   is escaped with a probability that cools after every escape.
//!
//! Neither is exact; both always return a maximal independent set.
//!
//! # Architecture
//!
//! - [`graph`]: the [`MutableGraph`](graph::MutableGraph) capability the
//!   search is generic over, an ordered adjacency implementation, and an
//!   edge-list loader.
//! - [`greedy`]: one randomized greedy pass over a graph snapshot.
//! - [`climb`]: the restart controller with optional escape schedule.
//! - [`sa`]: annealing defaults layered on the controller.
//! - [`timing`], [`report`], [`app`]: the run sequence used by the
//!   `u-indset` binary.

pub mod app;
pub mod climb;
pub mod error;
pub mod graph;
pub mod greedy;
pub mod report;
pub mod sa;
pub mod timing;

pub use error::IndSetError;
