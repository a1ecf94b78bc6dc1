//! Tour evaluation functions.
//!
//! Both evaluators score a tour as `1 / length`, so higher is better and
//! results are comparable across encodings.

use super::encoding::decode_sort_keys;
use super::instance::TspInstance;

/// Maps an encoded tour to a fitness value (higher is better).
pub trait Evaluator {
    fn value(&self, genes: &[usize]) -> f64;
}

/// Converts a tour length to fitness.
///
/// A zero-length tour (one city, or coincident cities) is unbeatable and
/// scores `f64::INFINITY`.
pub fn fitness_from_length(length: f64) -> f64 {
    if length > 0.0 {
        1.0 / length
    } else {
        f64::INFINITY
    }
}

/// Scores permutation-encoded tours.
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'a> {
    instance: &'a TspInstance,
}

impl<'a> RouteEvaluator<'a> {
    pub fn new(instance: &'a TspInstance) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &'a TspInstance {
        self.instance
    }

    pub fn tour_length(&self, perm: &[usize]) -> f64 {
        debug_assert!(
            super::encoding::is_valid_permutation(perm, self.instance.len()),
            "invalid permutation {perm:?}"
        );
        self.instance.tour_length(perm)
    }
}

impl Evaluator for RouteEvaluator<'_> {
    fn value(&self, perm: &[usize]) -> f64 {
        fitness_from_length(self.tour_length(perm))
    }
}

/// Scores sort-key-encoded tours by decoding them first.
#[derive(Debug, Clone, Copy)]
pub struct SortKeyEvaluator<'a> {
    route: RouteEvaluator<'a>,
}

impl<'a> SortKeyEvaluator<'a> {
    pub fn new(instance: &'a TspInstance) -> Self {
        Self {
            route: RouteEvaluator::new(instance),
        }
    }

    pub fn instance(&self) -> &'a TspInstance {
        self.route.instance()
    }
}

impl Evaluator for SortKeyEvaluator<'_> {
    fn value(&self, keys: &[usize]) -> f64 {
        self.route.value(&decode_sort_keys(keys))
    }
}
