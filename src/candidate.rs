//! Candidate solutions with memoized fitness.

use std::cell::OnceCell;

/// A solution paired with its lazily computed fitness.
///
/// Evaluating a tour is O(n), and runners compare the same candidate many
/// times, so the first evaluation is cached for the lifetime of the value.
/// Higher fitness is better.
#[derive(Debug, Clone)]
pub struct Candidate<S> {
    solution: S,
    fitness: OnceCell<f64>,
}

impl<S> Candidate<S> {
    /// Wraps an unevaluated solution.
    pub fn new(solution: S) -> Self {
        Self {
            solution,
            fitness: OnceCell::new(),
        }
    }

    /// Wraps a solution whose fitness is already known.
    pub fn evaluated(solution: S, fitness: f64) -> Self {
        let cell = OnceCell::new();
        let _ = cell.set(fitness);
        Self {
            solution,
            fitness: cell,
        }
    }

    pub fn solution(&self) -> &S {
        &self.solution
    }

    pub fn into_solution(self) -> S {
        self.solution
    }

    /// Returns the cached fitness, computing it with `eval` on first use.
    pub fn fitness_with<F: FnOnce(&S) -> f64>(&self, eval: F) -> f64 {
        *self.fitness.get_or_init(|| eval(&self.solution))
    }

    /// Returns the fitness if it has been computed.
    pub fn cached_fitness(&self) -> Option<f64> {
        self.fitness.get().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_fitness_evaluated_once() {
        let calls = Cell::new(0);
        let cand = Candidate::new(vec![1usize, 2, 3]);
        assert_eq!(cand.cached_fitness(), None);

        for _ in 0..3 {
            let f = cand.fitness_with(|s| {
                calls.set(calls.get() + 1);
                s.len() as f64
            });
            assert!((f - 3.0).abs() < 1e-12);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_evaluated_skips_eval() {
        let cand = Candidate::evaluated(vec![0usize], 0.5);
        let f = cand.fitness_with(|_| panic!("must not re-evaluate"));
        assert!((f - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_clone_keeps_cache() {
        let cand = Candidate::new(7u32);
        cand.fitness_with(|&v| v as f64);
        let copy = cand.clone();
        assert_eq!(copy.cached_fitness(), Some(7.0));
    }
}
