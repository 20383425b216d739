//! Run sequence behind the command-line binary.
//!
//! Validates a [`RunConfig`], loads the graph, runs the selected search
//! once, and optionally times additional runs.

use std::fmt;
use std::path::PathBuf;

use log::info;

use crate::climb::{ClimbConfig, ClimbResult, ClimbRunner};
use crate::error::{IndSetError, Result};
use crate::graph::{load_edge_list, AdjacencyGraph};
use crate::report;
use crate::sa::{SaConfig, SaRunner};
use crate::timing::{time_runs, TimingReport};

/// Search algorithm selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    HillClimbing,
    SimulatedAnnealing,
}

impl Algorithm {
    /// Resolves the mutually exclusive `--hill` / `--sim` flags.
    ///
    /// Exactly one flag must be set.
    pub fn from_flags(hill: bool, sim: bool) -> Result<Self> {
        match (hill, sim) {
            (true, false) => Ok(Algorithm::HillClimbing),
            (false, true) => Ok(Algorithm::SimulatedAnnealing),
            (true, true) => Err(IndSetError::config(
                "choose to run hill climbing (--hill) or simulated annealing (--sim), not both",
            )),
            (false, false) => Err(IndSetError::config(
                "you must choose to run hill climbing (--hill) or simulated annealing (--sim)",
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::HillClimbing => write!(f, "Hill Climbing"),
            Algorithm::SimulatedAnnealing => write!(f, "Simulated Annealing"),
        }
    }
}

/// Everything a single invocation needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Edge-list file to load.
    pub file: PathBuf,

    /// Search to run.
    pub algorithm: Algorithm,

    /// Additional timed runs. `None` or `Some(0)` skips timing.
    pub repeat: Option<usize>,

    /// Annealing schedule; its seed also seeds hill climbing.
    pub annealing: SaConfig,
}

impl RunConfig {
    pub fn new(file: impl Into<PathBuf>, algorithm: Algorithm) -> Self {
        Self {
            file: file.into(),
            algorithm,
            repeat: None,
            annealing: SaConfig::default(),
        }
    }

    pub fn with_repeat(mut self, runs: usize) -> Self {
        self.repeat = Some(runs);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.annealing.seed = Some(seed);
        self
    }

    pub fn with_annealing(mut self, annealing: SaConfig) -> Self {
        self.annealing = annealing;
        self
    }

    /// Validates the configuration without touching the filesystem.
    pub fn validate(&self) -> Result<()> {
        if self.algorithm == Algorithm::SimulatedAnnealing {
            self.annealing.validate().map_err(IndSetError::Config)?;
        }
        Ok(())
    }
}

/// Output of [`run`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub algorithm: Algorithm,
    pub file: PathBuf,
    pub result: ClimbResult<String>,
    pub timing: Option<TimingReport>,
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", report::format_header(self.algorithm, &self.file))?;
        write!(f, "{}", report::format_set(&self.result.best))?;
        if let Some(timing) = &self.timing {
            write!(
                f,
                "\n{}",
                report::format_timing(self.algorithm, &self.file, timing)
            )?;
        }
        Ok(())
    }
}

/// Runs the configured search on the configured file.
///
/// ## Errors
/// - [`IndSetError::Config`]: invalid annealing parameters (checked first)
/// - [`IndSetError::Io`] / [`IndSetError::Parse`]: the input file
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    config.validate()?;

    let graph = load_edge_list(&config.file)?;
    let result = search(&graph, config);
    info!(
        "{} on '{}' found a set of {}",
        config.algorithm,
        config.file.display(),
        result.best.len()
    );

    let timing = config.repeat.filter(|&runs| runs > 0).map(|runs| {
        time_runs(runs, || {
            std::hint::black_box(search(&graph, config));
        })
    });

    Ok(RunOutcome {
        algorithm: config.algorithm,
        file: config.file.clone(),
        result,
        timing,
    })
}

fn search(graph: &AdjacencyGraph<String>, config: &RunConfig) -> ClimbResult<String> {
    match config.algorithm {
        Algorithm::HillClimbing => {
            let climb = ClimbConfig {
                escape: None,
                seed: config.annealing.seed,
            };
            ClimbRunner::run(graph, &climb)
        }
        Algorithm::SimulatedAnnealing => SaRunner::run(graph, &config.annealing),
    }
}
