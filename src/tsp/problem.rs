//! TSP problem definitions for each search strategy.

use super::encoding::{random_permutation, random_sort_keys};
use super::eval::{Evaluator, RouteEvaluator, SortKeyEvaluator};
use super::instance::TspInstance;
use crate::ga::GaProblem;
use crate::hc::HillClimbingProblem;
use crate::mimic::ProbabilisticProblem;
use crate::operators::{order_crossover, swap_mutation, swap_neighbor};
use rand::Rng;

/// Permutation-encoded tours, for hill climbing, annealing and the GA.
#[derive(Debug, Clone, Copy)]
pub struct TspRouteProblem<'a> {
    evaluator: RouteEvaluator<'a>,
}

impl<'a> TspRouteProblem<'a> {
    pub fn new(instance: &'a TspInstance) -> Self {
        Self {
            evaluator: RouteEvaluator::new(instance),
        }
    }

    pub fn evaluator(&self) -> &RouteEvaluator<'a> {
        &self.evaluator
    }
}

impl HillClimbingProblem for TspRouteProblem<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        random_permutation(self.evaluator.instance().len(), rng)
    }

    fn value(&self, tour: &Vec<usize>) -> f64 {
        self.evaluator.value(tour)
    }

    fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        swap_neighbor(tour, rng)
    }
}

impl GaProblem for TspRouteProblem<'_> {
    type Genome = Vec<usize>;

    fn create_genome<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        random_permutation(self.evaluator.instance().len(), rng)
    }

    fn evaluate(&self, tour: &Vec<usize>) -> f64 {
        self.evaluator.value(tour)
    }

    fn crossover<R: Rng>(&self, a: &Vec<usize>, b: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        order_crossover(a, b, rng)
    }

    fn mutate<R: Rng>(&self, tour: &mut Vec<usize>, rng: &mut R) {
        swap_mutation(tour, rng);
    }
}

/// Sort-key-encoded tours, for MIMIC.
///
/// Every key ranges over `0..n` where `n` is the number of cities.
#[derive(Debug, Clone)]
pub struct TspSortProblem<'a> {
    evaluator: SortKeyEvaluator<'a>,
    ranges: Vec<usize>,
}

impl<'a> TspSortProblem<'a> {
    pub fn new(instance: &'a TspInstance) -> Self {
        let n = instance.len();
        Self {
            evaluator: SortKeyEvaluator::new(instance),
            ranges: vec![n; n],
        }
    }

    pub fn evaluator(&self) -> &SortKeyEvaluator<'a> {
        &self.evaluator
    }
}

impl ProbabilisticProblem for TspSortProblem<'_> {
    fn ranges(&self) -> &[usize] {
        &self.ranges
    }

    fn random_sample<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        random_sort_keys(&self.ranges, rng)
    }

    fn value(&self, keys: &[usize]) -> f64 {
        self.evaluator.value(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tsp::encoding::{decode_sort_keys, is_valid_permutation};

    #[test]
    fn test_route_problem_produces_valid_tours() {
        let mut rng = create_rng(42);
        let inst = TspInstance::random(12, &mut rng);
        let problem = TspRouteProblem::new(&inst);

        let a = problem.initial_solution(&mut rng);
        let b = problem.create_genome(&mut rng);
        assert!(is_valid_permutation(&a, 12));
        assert!(is_valid_permutation(&b, 12));

        let mut child = problem.crossover(&a, &b, &mut rng);
        problem.mutate(&mut child, &mut rng);
        assert!(is_valid_permutation(&child, 12));
        assert!(is_valid_permutation(&problem.neighbor(&child, &mut rng), 12));
    }

    #[test]
    fn test_both_encodings_score_alike() {
        let mut rng = create_rng(9);
        let inst = TspInstance::random(20, &mut rng);
        let route = TspRouteProblem::new(&inst);
        let sort = TspSortProblem::new(&inst);

        assert_eq!(sort.ranges(), &[20; 20][..]);
        for _ in 0..20 {
            let keys = sort.random_sample(&mut rng);
            let perm = decode_sort_keys(&keys);
            assert_eq!(sort.value(&keys), HillClimbingProblem::value(&route, &perm));
        }
    }
}
