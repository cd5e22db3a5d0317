//! SA configuration.

use crate::error::Error;

/// Configuration for the annealer.
///
/// Defaults match the reference parameterization: slow cooling, a
/// hundred neighborhood passes per outer restart, and a low stagnation
/// tolerance.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_cooling_rate(0.05)
///     .with_max_inner_iterations(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Cooling speed. Must be positive; larger values cool faster.
    pub cooling_rate: f64,

    /// Neighborhood passes per outer restart. Must be at least 1.
    pub max_inner_iterations: usize,

    /// Termination floor: the outer loop stops once the temperature is
    /// no longer above this. Must be positive, so the Metropolis
    /// division never sees a zero temperature.
    pub min_temperature: f64,

    /// Stagnation tolerance: the run stops after this many accepted
    /// non-improving moves since the last new best. Must be at least 1.
    pub no_improve_limit: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            cooling_rate: 0.02,
            max_inner_iterations: 100,
            min_temperature: 1e-3,
            no_improve_limit: 10,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_inner_iterations(mut self, n: usize) -> Self {
        self.max_inner_iterations = n;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_no_improve_limit(mut self, n: usize) -> Self {
        self.no_improve_limit = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration. Invalid values are rejected, never
    /// clamped.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.cooling_rate > 0.0) {
            return Err(Error::Config(format!(
                "cooling_rate must be positive, got {}",
                self.cooling_rate
            )));
        }
        if !(self.min_temperature > 0.0) {
            return Err(Error::Config(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if self.max_inner_iterations == 0 {
            return Err(Error::Config(
                "max_inner_iterations must be at least 1".into(),
            ));
        }
        if self.no_improve_limit == 0 {
            return Err(Error::Config("no_improve_limit must be at least 1".into()));
        }
        Ok(())
    }
}
