//! Randomized optimization on the Euclidean Traveling Salesman Problem.
//!
//! Compares four black-box search strategies on random TSP instances in
//! the unit square, under a sweep of iteration budgets:
//!
//! - **Randomized Hill Climbing (RHC)**: swap-neighbor local search that
//!   accepts equal or better tours.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with geometric
//!   cooling.
//! - **Genetic Algorithm (GA)**: order crossover, swap mutation and
//!   elitist truncation of the combined pool.
//! - **MIMIC**: estimation of distribution with a dependency-tree model
//!   over sort-key encoded tours.
//!
//! Fitness is maximized everywhere and is the inverse of the closed tour
//! length.
//!
//! # Architecture
//!
//! The strategies are generic over small problem traits
//! ([`hc::HillClimbingProblem`], [`ga::GaProblem`],
//! [`mimic::ProbabilisticProblem`]); [`tsp`] binds them to the TSP, and
//! [`experiment`] runs the comparison and persists aggregate results.

pub mod candidate;
pub mod error;
pub mod experiment;
pub mod ga;
pub mod hc;
pub mod mimic;
pub mod operators;
pub mod random;
pub mod sa;
pub mod tsp;
