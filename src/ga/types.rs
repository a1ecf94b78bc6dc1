//! Core trait definition for the GA framework.

use rand::Rng;

/// Defines a GA optimization problem.
///
/// This is the trait users implement to plug domain-specific logic into
/// the generic GA engine. It covers:
///
/// 1. **Initialization**: how to create random genomes
/// 2. **Evaluation**: how to compute fitness (higher is better)
/// 3. **Crossover**: how to recombine two parents into one child
/// 4. **Mutation**: how to perturb a genome
///
/// Fitness is cached per individual by the runner, so `evaluate` is
/// called once per genome that enters the selection pool.
pub trait GaProblem {
    /// The genome (solution) type for this problem.
    type Genome: Clone;

    /// Creates a random genome.
    ///
    /// Called during population initialization. The implementation should
    /// produce a valid (but not necessarily good) solution.
    fn create_genome<R: Rng>(&self, rng: &mut R) -> Self::Genome;

    /// Evaluates a genome. Higher values are better.
    fn evaluate(&self, genome: &Self::Genome) -> f64;

    /// Produces one offspring by recombining two parents.
    fn crossover<R: Rng>(
        &self,
        parent_a: &Self::Genome,
        parent_b: &Self::Genome,
        rng: &mut R,
    ) -> Self::Genome;

    /// Mutates a genome in place.
    fn mutate<R: Rng>(&self, genome: &mut Self::Genome, rng: &mut R);
}
