//! Core trait for trajectory (single-solution) search.

use rand::Rng;

/// Defines a problem for hill climbing and simulated annealing.
///
/// The user implements initial sampling, neighbor generation and
/// evaluation. The runners handle acceptance, best tracking and the
/// iteration budget.
///
/// # Maximization
///
/// Runners maximize [`value`](HillClimbingProblem::value). For a cost
/// function, return a strictly decreasing transform of it (e.g. `1 / cost`).
///
/// # Examples
///
/// ```ignore
/// struct TourProblem { instance: TspInstance }
///
/// impl HillClimbingProblem for TourProblem {
///     type Solution = Vec<usize>;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
///         random_permutation(self.instance.len(), rng)
///     }
///
///     fn value(&self, tour: &Vec<usize>) -> f64 {
///         1.0 / self.instance.tour_length(tour)
///     }
///
///     fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
///         swap_neighbor(tour, rng)
///     }
/// }
/// ```
pub trait HillClimbingProblem {
    /// The solution representation type.
    type Solution: Clone;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the fitness of a solution. Higher is better.
    fn value(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution.
    ///
    /// The neighborhood must be connected: any solution reachable from
    /// any other through a sequence of moves.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
