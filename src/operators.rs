//! Permutation operators shared by the search strategies.
//!
//! These operate on `&[usize]` index vectors and always map a valid
//! permutation to a valid permutation.
//!
//! - [`swap_neighbor`]: exchange two *distinct* positions (RHC and SA moves)
//! - [`swap_mutation`]: exchange two random positions (GA mutation)
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

/// Returns a copy of `perm` with two distinct random positions swapped.
///
/// Permutations shorter than two have no neighbors; they are returned
/// unchanged.
pub fn swap_neighbor<R: Rng>(perm: &[usize], rng: &mut R) -> Vec<usize> {
    let mut next = perm.to_vec();
    let n = next.len();
    if n < 2 {
        return next;
    }
    let (i, j) = distinct_pair(n, rng);
    next.swap(i, j);
    next
}

/// Swap mutation: exchange one random pair of positions in place.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (i, j) = distinct_pair(n, rng);
    perm.swap(i, j);
}

/// Order Crossover (OX) producing a single child.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Select a random segment `[start, end]` from `parent_a`
/// 2. Copy the segment to the child at the same positions
/// 3. Walk `parent_b` cyclically from `end + 1`, placing each city not yet
///    in the child into the next free position (also wrapping)
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");

    if n < 2 {
        return parent_a.to_vec();
    }

    let (start, end) = random_segment(n, rng);
    ox_build_child(parent_a, parent_b, start, end)
}

/// Build one OX child: copy segment from `template`, fill from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let val = donor[(end + 1 + offset) % n];
        if !in_segment[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }

    debug_assert!(
        crate::tsp::encoding::is_valid_permutation(&child, n),
        "OX produced an invalid child {child:?}"
    );
    child
}

/// Two different indices in `0..n`. Requires `n >= 2`.
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..n);
    // Draw from the n - 1 remaining slots and skip over `i`.
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tsp::encoding::{is_valid_permutation, random_permutation};
    use proptest::prelude::*;

    #[test]
    fn test_neighbor_differs_in_exactly_two_positions() {
        let mut rng = create_rng(42);
        let perm: Vec<usize> = (0..10).collect();
        for _ in 0..200 {
            let next = swap_neighbor(&perm, &mut rng);
            let diffs = perm.iter().zip(&next).filter(|(a, b)| a != b).count();
            assert_eq!(diffs, 2);
        }
    }

    #[test]
    fn test_neighbor_of_tiny_permutation() {
        let mut rng = create_rng(42);
        assert_eq!(swap_neighbor(&[0], &mut rng), vec![0]);
        assert_eq!(swap_neighbor(&[], &mut rng), Vec::<usize>::new());
        assert_eq!(swap_neighbor(&[0, 1], &mut rng), vec![1, 0]);
    }

    #[test]
    fn test_swap_mutation_single_element() {
        let mut rng = create_rng(42);
        let mut perm = vec![0];
        swap_mutation(&mut perm, &mut rng);
        assert_eq!(perm, vec![0]);
    }

    #[test]
    fn test_ox_keeps_segment_from_first_parent() {
        // With identical parents the child must equal them.
        let mut rng = create_rng(3);
        let p = vec![4, 2, 0, 3, 1];
        for _ in 0..20 {
            assert_eq!(order_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    fn test_ox_build_child_fixed_segment() {
        let a = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let b = vec![7, 6, 5, 4, 3, 2, 1, 0];
        // Segment [2, 4] from a is 2,3,4; b read from position 5 wraps: 2,1,0,7,6,5,4,3.
        let child = ox_build_child(&a, &b, 2, 4);
        assert_eq!(child, vec![6, 5, 2, 3, 4, 1, 0, 7]);
    }

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }

    proptest! {
        #[test]
        fn prop_operators_preserve_validity(seed in any::<u64>(), n in 1usize..60) {
            let mut rng = create_rng(seed);
            let a = random_permutation(n, &mut rng);
            let b = random_permutation(n, &mut rng);

            let mut child = order_crossover(&a, &b, &mut rng);
            prop_assert!(is_valid_permutation(&child, n));

            swap_mutation(&mut child, &mut rng);
            prop_assert!(is_valid_permutation(&child, n));

            let next = swap_neighbor(&child, &mut rng);
            prop_assert!(is_valid_permutation(&next, n));
        }
    }
}
