//! Randomized Hill Climbing (RHC).
//!
//! Repeatedly proposes a random neighbor of the current solution and moves
//! to it when it is at least as good. The [`HillClimbingProblem`] trait is
//! also the problem contract for [`crate::sa`].
//!
//! # References
//!
//! - Russell & Norvig (2010), *Artificial Intelligence: A Modern Approach*, §4.1

mod config;
mod runner;
mod types;

pub use config::RhcConfig;
pub use runner::{RhcResult, RhcRunner};
pub use types::HillClimbingProblem;
