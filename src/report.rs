//! Plain-text result formatting.
//!
//! ```text
//! Running Simulated Annealing on: samples/ran50.txt
//! Independent Set: ['39', '10', '42', '32', '26', '13', '36', '16', '47']
//! Length: 9
//! ------------
//! Running Simulated Annealing on: samples/ran50.txt for 5 iterations
//! Times: [0.0154, 0.0182, 0.0182, 0.0152, 0.0189]
//! Average time: 0.01718
//! ```

use std::fmt::Display;
use std::path::Path;

use crate::greedy::IndependentSet;
use crate::timing::TimingReport;

const SEPARATOR: &str = "------------";

/// `Running <algorithm> on: <file>`
pub fn format_header(algorithm: impl Display, file: &Path) -> String {
    format!("Running {algorithm} on: {}", file.display())
}

/// The set listing followed by its cardinality.
pub fn format_set<N: Display>(set: &IndependentSet<N>) -> String {
    format!("Independent Set: {set}\nLength: {}", set.len())
}

/// Separator, repeat banner, per-run durations and their mean.
pub fn format_timing(algorithm: impl Display, file: &Path, report: &TimingReport) -> String {
    let average = report
        .average()
        .map_or_else(|| "n/a".to_string(), |avg| avg.to_string());
    format!(
        "{SEPARATOR}\nRunning {algorithm} on: {} for {} iterations\nTimes: {:?}\nAverage time: {average}",
        file.display(),
        report.runs(),
        report.durations,
    )
}
