//! Randomized hill climbing loop.

use super::config::RhcConfig;
use super::types::HillClimbingProblem;
use crate::candidate::Candidate;
use crate::random::rng_from_option;
use rand::Rng;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct RhcResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Fitness of the best solution.
    pub best_fitness: f64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Number of neighbors that replaced the current solution.
    pub accepted_moves: usize,

    /// Best fitness before the first iteration and after each one.
    pub fitness_history: Vec<f64>,
}

/// Executes randomized hill climbing.
pub struct RhcRunner;

impl RhcRunner {
    /// Runs hill climbing with a generator seeded from `config.seed`.
    pub fn run<P: HillClimbingProblem>(problem: &P, config: &RhcConfig) -> RhcResult<P::Solution> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs hill climbing drawing from the caller's generator.
    pub fn run_with_rng<P: HillClimbingProblem, R: Rng>(
        problem: &P,
        config: &RhcConfig,
        rng: &mut R,
    ) -> RhcResult<P::Solution> {
        let eval = |s: &P::Solution| problem.value(s);

        let mut current = Candidate::new(problem.initial_solution(rng));
        let mut best = current.clone();
        let mut accepted_moves = 0usize;

        let mut fitness_history = Vec::with_capacity(config.iterations + 1);
        fitness_history.push(best.fitness_with(eval));

        for _ in 0..config.iterations {
            let neighbor = Candidate::new(problem.neighbor(current.solution(), rng));

            // Ties are accepted so the search can drift across plateaus.
            if neighbor.fitness_with(eval) >= current.fitness_with(eval) {
                current = neighbor;
                accepted_moves += 1;

                if current.fitness_with(eval) > best.fitness_with(eval) {
                    best = current.clone();
                }
            }

            fitness_history.push(best.fitness_with(eval));
        }

        let best_fitness = best.fitness_with(eval);
        RhcResult {
            best: best.into_solution(),
            best_fitness,
            iterations: config.iterations,
            accepted_moves,
            fitness_history,
        }
    }
}
