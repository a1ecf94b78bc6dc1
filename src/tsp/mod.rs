//! Euclidean Traveling Salesman domain.
//!
//! - [`TspInstance`]: random points in the unit square
//! - [`encoding`]: permutation and sort-key tour encodings
//! - [`Evaluator`]: fitness as inverse closed-tour length
//! - [`TspRouteProblem`] / [`TspSortProblem`]: bindings to the search
//!   strategies

pub mod encoding;
mod eval;
mod instance;
mod problem;

pub use eval::{fitness_from_length, Evaluator, RouteEvaluator, SortKeyEvaluator};
pub use instance::{Point, TspInstance};
pub use problem::{TspRouteProblem, TspSortProblem};
