//! Experiment configuration.

use super::strategy::StrategyParams;
use crate::error::ConfigError;
use crate::ga::GaConfig;
use crate::mimic::MimicConfig;
use crate::sa::SaConfig;

/// Iteration budgets swept by default.
pub const DEFAULT_ITERATION_BUDGETS: [usize; 6] = [20, 100, 500, 1000, 2500, 5000];

/// Configuration of a full comparison experiment.
///
/// For every iteration budget the harness runs `test_runs` trials; each
/// trial generates a fresh instance of `cities` points and runs all four
/// strategies on it.
///
/// # Examples
///
/// ```
/// use tsp_randopt::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default()
///     .with_cities(20)
///     .with_iteration_budgets(vec![10, 50])
///     .with_test_runs(3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Number of cities per generated instance.
    pub cities: usize,

    /// Iteration budgets, swept in order.
    pub iteration_budgets: Vec<usize>,

    /// Trials per budget.
    pub test_runs: usize,

    /// Per-strategy parameters.
    pub params: StrategyParams,

    /// Master seed. When unset every run draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            cities: 50,
            iteration_budgets: DEFAULT_ITERATION_BUDGETS.to_vec(),
            test_runs: 10,
            params: StrategyParams::default(),
            seed: None,
        }
    }
}

impl ExperimentConfig {
    pub fn with_cities(mut self, n: usize) -> Self {
        self.cities = n;
        self
    }

    pub fn with_iteration_budgets(mut self, budgets: Vec<usize>) -> Self {
        self.iteration_budgets = budgets;
        self
    }

    pub fn with_test_runs(mut self, n: usize) -> Self {
        self.test_runs = n;
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.params.sa = sa;
        self
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.params.ga = ga;
        self
    }

    pub fn with_mimic(mut self, mimic: MimicConfig) -> Self {
        self.params.mimic = mimic;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the experiment and every strategy's parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cities == 0 {
            return Err(ConfigError::NoCities);
        }
        if self.iteration_budgets.is_empty() {
            return Err(ConfigError::NoIterationBudgets);
        }
        if self.test_runs == 0 {
            return Err(ConfigError::NoTestRuns);
        }
        self.params.sa.validate()?;
        self.params.ga.validate()?;
        self.params.mimic.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert_eq!(config.cities, 50);
        assert_eq!(config.iteration_budgets, vec![20, 100, 500, 1000, 2500, 5000]);
        assert_eq!(config.test_runs, 10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_dimensions() {
        assert_eq!(
            ExperimentConfig::default().with_cities(0).validate(),
            Err(ConfigError::NoCities)
        );
        assert_eq!(
            ExperimentConfig::default()
                .with_iteration_budgets(vec![])
                .validate(),
            Err(ConfigError::NoIterationBudgets)
        );
        assert_eq!(
            ExperimentConfig::default().with_test_runs(0).validate(),
            Err(ConfigError::NoTestRuns)
        );
    }

    #[test]
    fn test_validate_checks_strategy_params() {
        let config =
            ExperimentConfig::default().with_sa(SaConfig::default().with_cooling_rate(1.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter { name: "cooling_rate", .. })
        ));

        let config = ExperimentConfig::default()
            .with_mimic(MimicConfig::default().with_samples(10).with_to_keep(20));
        assert!(config.validate().is_err());
    }
}
