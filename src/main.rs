use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use u_indset::app::{run, Algorithm, RunConfig};
use u_indset::sa::SaConfig;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "u-indset")]
#[command(about = "Large independent sets via hill climbing or simulated annealing")]
#[command(version)]
struct Args {
    /// Graph file to parse (NUM_NODES<TAB>NUM_EDGES header, one edge per line)
    #[arg(long)]
    file: PathBuf,

    /// Run with hill climbing (cannot be used with --sim)
    #[arg(long)]
    hill: bool,

    /// Run with simulated annealing (cannot be used with --hill)
    #[arg(long)]
    sim: bool,

    /// Run the algorithm N more times and report per-run times and their average
    #[arg(long, value_name = "N")]
    time: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Starting escape probability (requires --sim)
    #[arg(long, default_value = "2.0", requires = "sim")]
    initial_probability: f64,

    /// Escape probability decrease per escape (requires --sim)
    #[arg(long, default_value = "0.2", requires = "sim")]
    decay_rate: f64,

    /// Log every restart decision to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Mode flags are checked before any file is touched.
    let algorithm = Algorithm::from_flags(args.hill, args.sim)?;

    let mut annealing = SaConfig::default()
        .with_initial_probability(args.initial_probability)
        .with_decay_rate(args.decay_rate);
    if let Some(seed) = args.seed {
        annealing = annealing.with_seed(seed);
    }

    let mut config = RunConfig::new(&args.file, algorithm).with_annealing(annealing);
    if let Some(runs) = args.time {
        config = config.with_repeat(runs);
    }

    let outcome = run(&config)
        .with_context(|| format!("{} failed on '{}'", algorithm, args.file.display()))?;
    println!("{outcome}");

    Ok(())
}
