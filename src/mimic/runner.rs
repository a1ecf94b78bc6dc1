//! MIMIC generation loop.
//!
//! # Algorithm
//!
//! 1. Draw and evaluate an initial population uniformly at random
//! 2. At each generation:
//!    a. Keep the `to_keep` fittest vectors
//!    b. Fit a dependency tree to them
//!    c. Replace the population with fresh samples from the tree
//!    d. Evaluate the new population and update the best-ever vector
//!
//! Later generations can be worse than earlier ones, so the result is the
//! best vector ever evaluated, not the best of the final population.

use super::config::MimicConfig;
use super::tree::DependencyTree;
use super::types::ProbabilisticProblem;
use crate::candidate::Candidate;
use crate::random::rng_from_option;
use rand::Rng;

/// Result of a MIMIC run.
#[derive(Debug, Clone)]
pub struct MimicResult {
    /// The best vector ever evaluated.
    pub best: Vec<usize>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best-ever fitness after the initial population, then after each
    /// generation.
    pub fitness_history: Vec<f64>,

    /// Lowest elite fitness at each generation (the selection cutoff).
    pub cutoff_history: Vec<f64>,
}

/// Executes MIMIC.
pub struct MimicRunner;

impl MimicRunner {
    /// Runs MIMIC with a generator seeded from `config.seed`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`MimicConfig::validate`] first to get a descriptive error).
    pub fn run<P: ProbabilisticProblem>(problem: &P, config: &MimicConfig) -> MimicResult {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs MIMIC drawing from the caller's generator.
    pub fn run_with_rng<P: ProbabilisticProblem, R: Rng>(
        problem: &P,
        config: &MimicConfig,
        rng: &mut R,
    ) -> MimicResult {
        if let Err(e) = config.validate() {
            panic!("invalid MimicConfig: {e}");
        }

        let eval = |x: &Vec<usize>| problem.value(x);
        let ranges = problem.ranges();

        let mut population: Vec<Candidate<Vec<usize>>> = (0..config.samples)
            .map(|_| Candidate::new(problem.random_sample(rng)))
            .collect();
        rank_by_fitness(&mut population, eval);

        let mut best = population[0].clone();
        let mut fitness_history = Vec::with_capacity(config.iterations + 1);
        fitness_history.push(best.fitness_with(eval));
        let mut cutoff_history = Vec::with_capacity(config.iterations);

        for _ in 0..config.iterations {
            let elite = &population[..config.to_keep];
            cutoff_history.push(elite[elite.len() - 1].fitness_with(eval));

            let elite_samples: Vec<&[usize]> =
                elite.iter().map(|c| c.solution().as_slice()).collect();
            let model = DependencyTree::estimate(&elite_samples, ranges, config.smoothing);

            population = (0..config.samples)
                .map(|_| Candidate::new(model.sample(rng)))
                .collect();
            rank_by_fitness(&mut population, eval);

            if population[0].fitness_with(eval) > best.fitness_with(eval) {
                best = population[0].clone();
            }
            fitness_history.push(best.fitness_with(eval));
        }

        let best_fitness = best.fitness_with(eval);
        MimicResult {
            best: best.into_solution(),
            best_fitness,
            generations: config.iterations,
            fitness_history,
            cutoff_history,
        }
    }
}

/// Sorts best-first, keeping population order on ties.
fn rank_by_fitness<F>(population: &mut [Candidate<Vec<usize>>], eval: F)
where
    F: Fn(&Vec<usize>) -> f64 + Copy,
{
    population.sort_by(|a, b| b.fitness_with(eval).total_cmp(&a.fitness_with(eval)));
}
