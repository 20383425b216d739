//! Repeated wall-clock timing of a search entry point.
//!
//! Each run is a separate, sequential invocation; nothing is carried
//! from one run to the next beyond what the closure itself captures.

use std::time::Instant;

use log::debug;

/// Per-run wall-clock durations, in seconds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingReport {
    pub durations: Vec<f64>,
}

impl TimingReport {
    /// Number of timed runs.
    pub fn runs(&self) -> usize {
        self.durations.len()
    }

    /// Arithmetic mean of the durations, or `None` for zero runs.
    pub fn average(&self) -> Option<f64> {
        if self.durations.is_empty() {
            None
        } else {
            Some(self.durations.iter().sum::<f64>() / self.durations.len() as f64)
        }
    }
}

/// Times `runs` sequential invocations of `f`.
///
/// # Examples
///
/// ```
/// use u_indset::timing::time_runs;
///
/// let report = time_runs(3, || {
///     std::hint::black_box((0..1000).sum::<u64>());
/// });
/// assert_eq!(report.runs(), 3);
/// assert!(report.average().unwrap() >= 0.0);
/// ```
pub fn time_runs<F: FnMut()>(runs: usize, mut f: F) -> TimingReport {
    let mut durations = Vec::with_capacity(runs);
    for run in 0..runs {
        let start = Instant::now();
        f();
        let secs = start.elapsed().as_secs_f64();
        debug!("timed run {run}: {secs:.6}s");
        durations.push(secs);
    }
    TimingReport { durations }
}
