//! Budget sweep, timing and aggregation.

use super::config::ExperimentConfig;
use super::sink::ResultSink;
use super::strategy::Strategy;
use crate::error::ConfigError;
use crate::random::rng_from_option;
use crate::tsp::TspInstance;
use rand::Rng;
use std::time::Instant;

/// Outcome of one strategy on one trial instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrialResult {
    pub strategy: Strategy,
    pub iteration_budget: usize,
    pub trial: usize,
    pub best_fitness: f64,
    pub elapsed_seconds: f64,
}

/// Mean outcome of one strategy over all trials of a budget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AggregateResult {
    pub strategy: Strategy,
    pub iteration_budget: usize,
    pub mean_fitness: f64,
    pub mean_elapsed_seconds: f64,
}

impl AggregateResult {
    /// Averages the trials of `strategy`. Returns `None` if there are none.
    pub fn from_trials(
        strategy: Strategy,
        iteration_budget: usize,
        trials: &[TrialResult],
    ) -> Option<Self> {
        let (count, fitness_sum, elapsed_sum) = trials
            .iter()
            .filter(|t| t.strategy == strategy)
            .fold((0usize, 0.0, 0.0), |(n, f, e), t| {
                (n + 1, f + t.best_fitness, e + t.elapsed_seconds)
            });
        if count == 0 {
            return None;
        }
        Some(Self {
            strategy,
            iteration_budget,
            mean_fitness: fitness_sum / count as f64,
            mean_elapsed_seconds: elapsed_sum / count as f64,
        })
    }
}

/// Runs the comparison experiment.
///
/// # Examples
///
/// ```
/// use tsp_randopt::experiment::{ExperimentConfig, ExperimentHarness, MemorySink};
///
/// let config = ExperimentConfig::default()
///     .with_cities(8)
///     .with_iteration_budgets(vec![5])
///     .with_test_runs(2)
///     .with_seed(1);
/// let harness = ExperimentHarness::new(config).unwrap();
/// let mut sink = MemorySink::default();
/// let rows = harness.run(&mut sink);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].len(), 4);
/// assert_eq!(sink.rows, rows);
/// ```
#[derive(Debug, Clone)]
pub struct ExperimentHarness {
    config: ExperimentConfig,
}

impl ExperimentHarness {
    /// Validates `config` and wraps it.
    pub fn new(config: ExperimentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Sweeps every budget, handing each aggregate row to `sink`.
    ///
    /// A failing sink is logged and skipped; the sweep always completes.
    /// Returns the aggregate rows in budget order.
    pub fn run<S: ResultSink>(&self, sink: &mut S) -> Vec<Vec<AggregateResult>> {
        let mut rng = rng_from_option(self.config.seed);
        let mut rows = Vec::with_capacity(self.config.iteration_budgets.len());

        for &budget in &self.config.iteration_budgets {
            let trials = self.run_budget(budget, &mut rng);
            let row: Vec<AggregateResult> = Strategy::ALL
                .iter()
                .filter_map(|&s| AggregateResult::from_trials(s, budget, &trials))
                .collect();

            for agg in &row {
                log::info!(
                    "{} budget={} mean_fitness={:.6} mean_time={:.4}s",
                    agg.strategy,
                    budget,
                    agg.mean_fitness,
                    agg.mean_elapsed_seconds
                );
            }
            if let Err(e) = sink.append(&row) {
                log::error!("failed to persist results for budget {budget}: {e}");
            }
            rows.push(row);
        }
        rows
    }

    /// Runs all trials of one budget.
    ///
    /// Each trial draws a fresh instance from `rng`, then runs every
    /// strategy on it with its own seed drawn from `rng`.
    pub fn run_budget<R: Rng>(&self, budget: usize, rng: &mut R) -> Vec<TrialResult> {
        let mut trials = Vec::with_capacity(self.config.test_runs * Strategy::ALL.len());

        for trial in 0..self.config.test_runs {
            let instance = TspInstance::random(self.config.cities, rng);
            for strategy in Strategy::ALL {
                let seed: u64 = rng.random();
                let start = Instant::now();
                let outcome = strategy.run(&instance, budget, &self.config.params, seed);
                let elapsed_seconds = start.elapsed().as_secs_f64();

                log::debug!(
                    "{strategy} budget={budget} trial={trial} fitness={:.6} time={elapsed_seconds:.4}s",
                    outcome.best_fitness
                );
                trials.push(TrialResult {
                    strategy,
                    iteration_budget: budget,
                    trial,
                    best_fitness: outcome.best_fitness,
                    elapsed_seconds,
                });
            }
        }
        trials
    }
}
