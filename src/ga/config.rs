//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_randopt::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.crossover_count, 100);
/// assert_eq!(config.mutation_count, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_randopt::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_selection(Selection::Tournament(3))
///     .with_max_generations(300);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals kept after each generation.
    pub population_size: usize,

    /// Crossover offspring produced per generation.
    pub crossover_count: usize,

    /// Mutated copies produced per generation. Originals are kept.
    pub mutation_count: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Strategy for choosing crossover parents.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            crossover_count: 100,
            mutation_count: 10,
            max_generations: 1000,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of crossover offspring per generation.
    pub fn with_crossover_count(mut self, n: usize) -> Self {
        self.crossover_count = n;
        self
    }

    /// Sets the number of mutants per generation.
    pub fn with_mutation_count(mut self, n: usize) -> Self {
        self.mutation_count = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the parent selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::invalid("population_size", "must be at least 1"));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(ConfigError::invalid("tournament size", "must be at least 1"));
        }
        Ok(())
    }
}
