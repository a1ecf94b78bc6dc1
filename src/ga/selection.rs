//! Parent selection strategies for the GA.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

/// Selection strategy for choosing crossover parents.
///
/// All strategies assume **maximization** (higher fitness = better) and
/// sample with replacement.
///
/// # Examples
///
/// ```
/// use tsp_randopt::ga::Selection;
///
/// // Every individual equally likely
/// let sel = Selection::Uniform;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Uniform random choice, ignoring fitness.
    ///
    /// All selection pressure then comes from survivor truncation.
    #[default]
    Uniform,

    /// Tournament selection: pick `k` individuals at random, keep the best.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Selection {
    /// Select a parent index given the population's fitness values.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> usize {
        assert!(!fitness.is_empty(), "cannot select from empty population");

        match self {
            Selection::Uniform => rng.random_range(0..fitness.len()),
            Selection::Tournament(k) => tournament(fitness, *k, rng),
        }
    }
}

fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = fitness.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if fitness[idx] > fitness[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}
