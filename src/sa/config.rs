//! SA configuration and escape schedule defaults.

use crate::climb::{ClimbConfig, EscapeSchedule};

/// Above this many escapes, `guaranteed_escapes` stops replaying float steps.
const EXACT_ESCAPE_LIMIT: usize = 1_000_000;

/// Configuration for simulated annealing.
///
/// The defaults (`initial_probability = 2.0`, `decay_rate = 0.2`) start
/// above 1, so the first escapes are unconditional: a draw in [0, 1)
/// can never exceed a probability of 1 or more. The two values are
/// coupled; [`guaranteed_escapes`](SaConfig::guaranteed_escapes) reports
/// how many unconditional escapes a pair produces.
///
/// # Examples
///
/// ```
/// use u_indset::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_probability(1.5)
///     .with_decay_rate(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Escape probability before the first escape.
    pub initial_probability: f64,

    /// Amount the escape probability drops after each escape.
    pub decay_rate: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_probability: 2.0,
            decay_rate: 0.2,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_probability(mut self, p: f64) -> Self {
        self.initial_probability = p;
        self
    }

    pub fn with_decay_rate(mut self, rate: f64) -> Self {
        self.decay_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The escape schedule handed to the hill-climbing controller.
    pub fn schedule(&self) -> EscapeSchedule {
        EscapeSchedule::new(self.initial_probability, self.decay_rate)
    }

    /// Number of escapes accepted regardless of the random draw.
    ///
    /// Counts escapes taken while the probability is still at least 1.
    /// Returns `None` when that count is unbounded: the probability starts
    /// at or above 1 and the decay rate is not positive, or is too small
    /// to change the probability in `f64`.
    ///
    /// With the defaults this is 6, not 5: after five subtractions of
    /// `0.2` the probability is `1.0000000000000002`. Counts above one
    /// million use the closed form `floor((p - 1) / d) + 1`
    /// instead of replaying the subtractions.
    pub fn guaranteed_escapes(&self) -> Option<usize> {
        if self.initial_probability.is_nan() || self.initial_probability < 1.0 {
            return Some(0);
        }
        let mut p = self.initial_probability;
        if self.decay_rate <= 0.0 || p - self.decay_rate == p {
            return None;
        }

        let estimate = ((p - 1.0) / self.decay_rate).floor();
        if estimate > EXACT_ESCAPE_LIMIT as f64 {
            return Some(estimate as usize + 1);
        }

        let mut count = 0;
        while p >= 1.0 {
            count += 1;
            p -= self.decay_rate;
        }
        Some(count)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_probability.is_finite() {
            return Err(format!(
                "initial_probability must be finite, got {}",
                self.initial_probability
            ));
        }
        if !self.decay_rate.is_finite() {
            return Err(format!(
                "decay_rate must be finite, got {}",
                self.decay_rate
            ));
        }
        Ok(())
    }
}

impl From<&SaConfig> for ClimbConfig {
    fn from(config: &SaConfig) -> Self {
        ClimbConfig {
            escape: Some(config.schedule()),
            seed: config.seed,
        }
    }
}
