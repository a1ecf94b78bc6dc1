//! SA execution loop.

use super::config::SaConfig;
use crate::candidate::Candidate;
use crate::hc::HillClimbingProblem;
use crate::random::rng_from_option;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Fitness of the best solution.
    pub best_fitness: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best fitness before the first iteration and after each one.
    pub fitness_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: HillClimbingProblem>(problem: &P, config: &SaConfig) -> SaResult<P::Solution> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing from the caller's generator.
    pub fn run_with_rng<P: HillClimbingProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> SaResult<P::Solution> {
        if let Err(e) = config.validate() {
            panic!("invalid SaConfig: {e}");
        }

        let eval = |s: &P::Solution| problem.value(s);

        let mut current = Candidate::new(problem.initial_solution(rng));
        let mut best = current.clone();

        let mut temperature = config.initial_temperature;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut fitness_history = Vec::with_capacity(config.iterations + 1);
        fitness_history.push(best.fitness_with(eval));

        for _ in 0..config.iterations {
            let neighbor = Candidate::new(problem.neighbor(current.solution(), rng));
            let delta = neighbor.fitness_with(eval) - current.fitness_with(eval);

            // Metropolis acceptance criterion, maximizing
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < acceptance_probability(delta, temperature)
            };

            if accept {
                current = neighbor;
                accepted_moves += 1;

                if current.fitness_with(eval) > best.fitness_with(eval) {
                    best = current.clone();
                }
            }

            fitness_history.push(best.fitness_with(eval));
            temperature *= config.cooling_rate;
        }

        let best_fitness = best.fitness_with(eval);
        SaResult {
            best: best.into_solution(),
            best_fitness,
            iterations: config.iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            fitness_history,
        }
    }
}

/// Probability of accepting a non-improving move (`delta <= 0`).
///
/// The temperature can underflow to zero on long runs; at that point only
/// equal-fitness moves are accepted.
fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta == 0.0 {
        1.0
    } else if temperature > 0.0 {
        (delta / temperature).exp()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::swap_neighbor;
    use crate::tsp::encoding::random_permutation;

    // ---- Quadratic maximization: f(x) = -x^2, maximum at 0 ----

    struct QuadraticProblem;

    impl HillClimbingProblem for QuadraticProblem {
        type Solution = f64;

        fn initial_solution<R: Rng>(&self, rng: &mut R) -> f64 {
            rng.random_range(-10.0..10.0)
        }

        fn value(&self, x: &f64) -> f64 {
            -(x * x)
        }

        fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> f64 {
            x + rng.random_range(-1.0..1.0)
        }
    }

    #[test]
    fn test_sa_quadratic() {
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_cooling_rate(0.995)
            .with_iterations(5000)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, &config);

        assert!(
            result.best_fitness > -1.0,
            "expected near-zero x, got fitness {}",
            result.best_fitness
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves > result.improving_moves);
    }

    #[test]
    fn test_sa_history_non_decreasing() {
        let config = SaConfig::default()
            .with_initial_temperature(50.0)
            .with_cooling_rate(0.99)
            .with_iterations(1000)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, &config);

        assert_eq!(result.fitness_history.len(), 1001);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness history should be non-decreasing: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_sa_cools_once_per_iteration() {
        let config = SaConfig::default()
            .with_initial_temperature(1000.0)
            .with_cooling_rate(0.5)
            .with_iterations(10)
            .with_seed(1);

        let result = SaRunner::run(&QuadraticProblem, &config);

        let expected = 1000.0 * 0.5f64.powi(10);
        assert!((result.final_temperature - expected).abs() < 1e-9);
        assert_eq!(result.iterations, 10);
    }

    #[test]
    fn test_sa_metropolis_accepts_downhill_when_hot() {
        // At the reference starting temperature nearly every move is taken.
        let config = SaConfig::default()
            .with_initial_temperature(1e11)
            .with_cooling_rate(0.9999)
            .with_iterations(1000)
            .with_seed(42);

        let result = SaRunner::run(&QuadraticProblem, &config);

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.99,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
    }

    #[test]
    fn test_acceptance_probability() {
        assert_eq!(acceptance_probability(0.0, 0.0), 1.0);
        assert_eq!(acceptance_probability(-1.0, 0.0), 0.0);
        assert!((acceptance_probability(-1.0, 1.0) - (-1.0f64).exp()).abs() < 1e-12);
        assert!(acceptance_probability(-0.1, 1e11) > 0.999_999);
    }

    // ---- Discrete: permutation sorting ----

    struct PermSortProblem {
        n: usize,
    }

    impl HillClimbingProblem for PermSortProblem {
        type Solution = Vec<usize>;

        fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
            random_permutation(self.n, rng)
        }

        fn value(&self, perm: &Vec<usize>) -> f64 {
            perm.iter().enumerate().filter(|&(i, &v)| i == v).count() as f64
        }

        fn neighbor<R: Rng>(&self, perm: &Vec<usize>, rng: &mut R) -> Vec<usize> {
            swap_neighbor(perm, rng)
        }
    }

    #[test]
    fn test_sa_permutation_sort() {
        let problem = PermSortProblem { n: 10 };
        let config = SaConfig::default()
            .with_initial_temperature(5.0)
            .with_cooling_rate(0.995)
            .with_iterations(5000)
            .with_seed(42);

        let result = SaRunner::run(&problem, &config);

        assert!(
            result.best_fitness >= 6.0,
            "expected near-sorted permutation, got {} fixed points",
            result.best_fitness
        );
    }

    #[test]
    #[should_panic(expected = "invalid SaConfig")]
    fn test_sa_rejects_invalid_config() {
        let config = SaConfig::default().with_cooling_rate(2.0);
        SaRunner::run(&QuadraticProblem, &config);
    }
}
