//! Hill climbing configuration.

/// Configuration for randomized hill climbing.
///
/// # Examples
///
/// ```
/// use tsp_randopt::hc::RhcConfig;
///
/// let config = RhcConfig::default().with_iterations(500).with_seed(7);
/// assert_eq!(config.iterations, 500);
/// ```
#[derive(Debug, Clone)]
pub struct RhcConfig {
    /// Number of neighbor evaluations. The run never stops early.
    pub iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for RhcConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            seed: None,
        }
    }
}

impl RhcConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
