//! Hill climbing with random restarts.
//!
//! Each restart runs one greedy pass on a fresh snapshot of the graph.
//! The controller keeps the largest set seen and stops at the first
//! restart that fails to improve on it. With an [`EscapeSchedule`], a
//! non-improving restart is instead escaped with a probability that
//! drops by a fixed decay rate after every escape; this is the hook the
//! [`sa`](crate::sa) module builds on.
//!
//! The number of restarts is bounded by the node count of the graph.

mod config;
mod runner;

pub use config::{ClimbConfig, EscapeSchedule};
pub use runner::{ClimbResult, ClimbRunner, StopReason};
