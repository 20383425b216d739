//! Hill-climbing configuration.

/// Probability of escaping a non-improving restart, and how fast it cools.
///
/// Both values travel together: a schedule without a decay rate (or the
/// reverse) is not representable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscapeSchedule {
    /// Starting escape probability. Values above 1 escape unconditionally
    /// until decay brings them below 1.
    pub probability: f64,

    /// Amount subtracted from the probability after each escape.
    ///
    /// Zero or negative rates never cool; the restart budget still bounds
    /// the search.
    pub decay_rate: f64,
}

impl EscapeSchedule {
    pub fn new(probability: f64, decay_rate: f64) -> Self {
        Self {
            probability,
            decay_rate,
        }
    }

    /// Returns `true` if both the probability and the decay rate are finite.
    pub fn is_finite(&self) -> bool {
        self.probability.is_finite() && self.decay_rate.is_finite()
    }
}

/// Configuration for the hill-climbing controller.
///
/// # Examples
///
/// ```
/// use u_indset::climb::ClimbConfig;
///
/// let config = ClimbConfig::default()
///     .with_escape(0.8, 0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbConfig {
    /// Escape schedule. `None` is pure hill climbing: stop at the first
    /// restart that does not improve on the best set.
    pub escape: Option<EscapeSchedule>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl ClimbConfig {
    pub fn with_escape(mut self, probability: f64, decay_rate: f64) -> Self {
        self.escape = Some(EscapeSchedule::new(probability, decay_rate));
        self
    }

    pub fn with_schedule(mut self, schedule: EscapeSchedule) -> Self {
        self.escape = Some(schedule);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(schedule) = self.escape {
            if !schedule.probability.is_finite() {
                return Err(format!(
                    "escape probability must be finite, got {}",
                    schedule.probability
                ));
            }
            if !schedule.decay_rate.is_finite() {
                return Err(format!(
                    "escape decay rate must be finite, got {}",
                    schedule.decay_rate
                ));
            }
        }
        Ok(())
    }
}
