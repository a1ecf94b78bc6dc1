//! Comparison experiment.
//!
//! Sweeps a set of iteration budgets. For each budget, every trial builds a
//! fresh random instance and runs all four strategies on it; the per-budget
//! means go to a [`ResultSink`] as one row.

mod config;
mod harness;
mod sink;
mod strategy;

pub use config::{ExperimentConfig, DEFAULT_ITERATION_BUDGETS};
pub use harness::{AggregateResult, ExperimentHarness, TrialResult};
pub use sink::{CsvFileSink, MemorySink, ResultSink};
pub use strategy::{Strategy, StrategyOutcome, StrategyParams};
