//! MIMIC configuration.

use crate::error::ConfigError;

/// Configuration for MIMIC.
///
/// # Examples
///
/// ```
/// use tsp_randopt::mimic::MimicConfig;
///
/// let config = MimicConfig::default().with_samples(100).with_to_keep(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct MimicConfig {
    /// Vectors drawn per generation.
    pub samples: usize,

    /// Elite vectors the model is fitted to.
    pub to_keep: usize,

    /// Additive smoothing weight for all probability estimates.
    pub smoothing: f64,

    /// Number of generations.
    pub iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for MimicConfig {
    fn default() -> Self {
        Self {
            samples: 200,
            to_keep: 20,
            smoothing: 0.1,
            iterations: 100,
            seed: None,
        }
    }
}

impl MimicConfig {
    pub fn with_samples(mut self, n: usize) -> Self {
        self.samples = n;
        self
    }

    pub fn with_to_keep(mut self, n: usize) -> Self {
        self.to_keep = n;
        self
    }

    pub fn with_smoothing(mut self, m: f64) -> Self {
        self.smoothing = m;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::invalid("samples", "must be at least 1"));
        }
        if self.to_keep == 0 || self.to_keep > self.samples {
            return Err(ConfigError::invalid(
                "to_keep",
                format!("must be in 1..={}, got {}", self.samples, self.to_keep),
            ));
        }
        if !(self.smoothing > 0.0) {
            return Err(ConfigError::invalid(
                "smoothing",
                format!("must be positive, got {}", self.smoothing),
            ));
        }
        Ok(())
    }
}
