//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! initialization → selection → crossover → mutation → truncation → repeat.

use super::config::GaConfig;
use super::types::GaProblem;
use crate::candidate::Candidate;
use crate::random::rng_from_option;
use rand::Rng;

/// Summary of the population at the end of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,

    /// Best fitness found so far.
    pub best_fitness: f64,

    /// Mean fitness of the surviving population.
    pub mean_fitness: f64,

    /// Number of survivors.
    pub population_size: usize,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<G: Clone> {
    /// The best genome found during the entire run.
    pub best: G,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness of the initial population, then after each generation.
    pub fitness_history: Vec<f64>,

    /// Per-generation population statistics.
    pub stats: Vec<GenerationStats>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = TspRouteProblem::new(&instance);
/// let config = GaConfig::default().with_max_generations(500).with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Genome> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing from the caller's generator.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> GaResult<P::Genome> {
        if let Err(e) = config.validate() {
            panic!("invalid GaConfig: {e}");
        }

        let eval = |g: &P::Genome| problem.evaluate(g);
        let pop_size = config.population_size;

        // 1. Initialize and rank population
        let mut population: Vec<Candidate<P::Genome>> = (0..pop_size)
            .map(|_| Candidate::new(problem.create_genome(rng)))
            .collect();
        rank_by_fitness(&mut population, eval);

        let mut best = population[0].clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness_with(eval));
        let mut stats = Vec::with_capacity(config.max_generations);

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            let fitness: Vec<f64> = population.iter().map(|c| c.fitness_with(eval)).collect();
            let mut offspring =
                Vec::with_capacity(config.crossover_count + config.mutation_count);

            // Crossover
            for _ in 0..config.crossover_count {
                let a = config.selection.select(&fitness, rng);
                let b = config.selection.select(&fitness, rng);
                let child =
                    problem.crossover(population[a].solution(), population[b].solution(), rng);
                offspring.push(Candidate::new(child));
            }

            // Mutation of uniformly chosen copies
            for _ in 0..config.mutation_count {
                let idx = rng.random_range(0..population.len());
                let mut mutant = population[idx].solution().clone();
                problem.mutate(&mut mutant, rng);
                offspring.push(Candidate::new(mutant));
            }

            // Elitist truncation of parents + offspring back to pop_size
            population.extend(offspring);
            rank_by_fitness(&mut population, eval);
            population.truncate(pop_size);

            if population[0].fitness_with(eval) > best.fitness_with(eval) {
                best = population[0].clone();
            }

            let best_fitness = best.fitness_with(eval);
            fitness_history.push(best_fitness);
            stats.push(GenerationStats {
                generation: gen + 1,
                best_fitness,
                mean_fitness: population.iter().map(|c| c.fitness_with(eval)).sum::<f64>()
                    / population.len() as f64,
                population_size: population.len(),
            });
        }

        let best_fitness = best.fitness_with(eval);
        GaResult {
            best: best.into_solution(),
            best_fitness,
            generations: config.max_generations,
            fitness_history,
            stats,
        }
    }
}

/// Sorts the population best-first. Stable, so on ties older individuals
/// stay ahead of newer ones.
fn rank_by_fitness<G, F>(population: &mut [Candidate<G>], eval: F)
where
    F: Fn(&G) -> f64 + Copy,
{
    population.sort_by(|a, b| b.fitness_with(eval).total_cmp(&a.fitness_with(eval)));
}

// ============================================================================
// Tests
// ============================================================================
