//! The four compared search strategies behind one interface.

use crate::ga::{GaConfig, GaRunner};
use crate::hc::{RhcConfig, RhcRunner};
use crate::mimic::{MimicConfig, MimicRunner};
use crate::sa::{SaConfig, SaRunner};
use crate::tsp::encoding::decode_sort_keys;
use crate::tsp::{TspInstance, TspRouteProblem, TspSortProblem};
use std::fmt;

/// A search strategy under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Strategy {
    #[cfg_attr(feature = "serde", serde(rename = "rhc"))]
    RandomHillClimbing,
    #[cfg_attr(feature = "serde", serde(rename = "sa"))]
    SimulatedAnnealing,
    #[cfg_attr(feature = "serde", serde(rename = "ga"))]
    GeneticAlgorithm,
    #[cfg_attr(feature = "serde", serde(rename = "mimic"))]
    Mimic,
}

/// Algorithm parameters shared by every run of a strategy.
///
/// Iteration counts and seeds in these templates are ignored; each run
/// gets its budget and a fresh seed from the harness.
#[derive(Debug, Clone, Default)]
pub struct StrategyParams {
    pub sa: SaConfig,
    pub ga: GaConfig,
    pub mimic: MimicConfig,
}

/// Best tour found by one strategy run.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyOutcome {
    /// Visiting order (decoded for sort-key strategies).
    pub best_tour: Vec<usize>,

    /// Fitness of `best_tour`.
    pub best_fitness: f64,
}

impl Strategy {
    /// All strategies, in the order the harness runs them.
    pub const ALL: [Strategy; 4] = [
        Strategy::RandomHillClimbing,
        Strategy::SimulatedAnnealing,
        Strategy::GeneticAlgorithm,
        Strategy::Mimic,
    ];

    /// Short tag used in result rows.
    pub fn tag(&self) -> &'static str {
        match self {
            Strategy::RandomHillClimbing => "rhc",
            Strategy::SimulatedAnnealing => "sa",
            Strategy::GeneticAlgorithm => "ga",
            Strategy::Mimic => "mimic",
        }
    }

    /// Runs this strategy for `iterations` steps on `instance`.
    ///
    /// The runner owns a generator seeded with `seed`.
    pub fn run(
        &self,
        instance: &TspInstance,
        iterations: usize,
        params: &StrategyParams,
        seed: u64,
    ) -> StrategyOutcome {
        match self {
            Strategy::RandomHillClimbing => {
                let problem = TspRouteProblem::new(instance);
                let config = RhcConfig::default()
                    .with_iterations(iterations)
                    .with_seed(seed);
                let result = RhcRunner::run(&problem, &config);
                StrategyOutcome {
                    best_tour: result.best,
                    best_fitness: result.best_fitness,
                }
            }
            Strategy::SimulatedAnnealing => {
                let problem = TspRouteProblem::new(instance);
                let config = params
                    .sa
                    .clone()
                    .with_iterations(iterations)
                    .with_seed(seed);
                let result = SaRunner::run(&problem, &config);
                StrategyOutcome {
                    best_tour: result.best,
                    best_fitness: result.best_fitness,
                }
            }
            Strategy::GeneticAlgorithm => {
                let problem = TspRouteProblem::new(instance);
                let config = params
                    .ga
                    .clone()
                    .with_max_generations(iterations)
                    .with_seed(seed);
                let result = GaRunner::run(&problem, &config);
                StrategyOutcome {
                    best_tour: result.best,
                    best_fitness: result.best_fitness,
                }
            }
            Strategy::Mimic => {
                let problem = TspSortProblem::new(instance);
                let config = params
                    .mimic
                    .clone()
                    .with_iterations(iterations)
                    .with_seed(seed);
                let result = MimicRunner::run(&problem, &config);
                StrategyOutcome {
                    best_tour: decode_sort_keys(&result.best),
                    best_fitness: result.best_fitness,
                }
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
