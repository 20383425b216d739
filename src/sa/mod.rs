//! Simulated annealing over greedy restarts.
//!
//! Annealing here is the hill-climbing controller with an escape
//! schedule: a restart that fails to improve is escaped with probability
//! `p`, and every escape cools `p` by a fixed decay rate. Early escapes
//! let the search wander past local maxima; as `p` falls, non-improving
//! restarts become increasingly likely to end the run.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::SaRunner;
