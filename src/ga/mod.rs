//! Genetic Algorithm framework.
//!
//! A generic GA built on a trait-based problem abstraction. Users define
//! their problem by implementing [`GaProblem`], which specifies how to
//! create, evaluate, recombine, and mutate genomes.
//!
//! Each generation produces a fixed number of crossover children and
//! mutated copies, then keeps the fittest `population_size` individuals of
//! parents and offspring combined (elitist truncation).
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, offspring counts)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::Selection;
pub use types::GaProblem;
