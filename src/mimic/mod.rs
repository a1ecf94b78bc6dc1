//! MIMIC: Mutual-Information-Maximizing Input Clustering.
//!
//! An estimation-of-distribution algorithm. Each generation fits a
//! dependency-tree model to the fittest samples and draws the next
//! population from it, so the search learns the structure of good
//! solutions instead of perturbing individual ones.
//!
//! # References
//!
//! - De Bonet, Isbell & Viola (1997), "MIMIC: Finding Optima by Estimating
//!   Probability Densities"
//! - Chow & Liu (1968), "Approximating Discrete Probability Distributions
//!   with Dependence Trees"

mod config;
mod runner;
mod tree;
mod types;

pub use config::MimicConfig;
pub use runner::{MimicResult, MimicRunner};
pub use tree::{DependencyTree, ProbabilityRow, ProbabilityTable, TreeNode};
pub use types::ProbabilisticProblem;
