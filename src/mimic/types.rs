//! Core trait for MIMIC.

use rand::Rng;

/// Defines a problem over fixed-length vectors of discrete variables.
///
/// Variable `i` takes values in `0..ranges()[i]`. The MIMIC engine handles
/// elite selection, model fitting and resampling; the user supplies the
/// domain, an initial sampler and the fitness function.
///
/// # Examples
///
/// ```ignore
/// struct SortKeyTour<'a> { eval: SortKeyEvaluator<'a>, ranges: Vec<usize> }
///
/// impl ProbabilisticProblem for SortKeyTour<'_> {
///     fn ranges(&self) -> &[usize] { &self.ranges }
///     fn random_sample<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
///         random_sort_keys(&self.ranges, rng)
///     }
///     fn value(&self, keys: &[usize]) -> f64 { self.eval.value(keys) }
/// }
/// ```
pub trait ProbabilisticProblem {
    /// Domain size of each variable.
    fn ranges(&self) -> &[usize];

    /// Draws one vector for the initial population.
    fn random_sample<R: Rng>(&self, rng: &mut R) -> Vec<usize>;

    /// Fitness of a vector. Higher is better.
    fn value(&self, sample: &[usize]) -> f64;
}
