//! Tour encodings.
//!
//! - **Permutation**: the tour is the visiting order itself. Every index in
//!   `0..n` appears exactly once.
//! - **Sort key**: a vector of `n` bounded integer keys. Sorting city
//!   indices by key (stable, so equal keys keep index order) yields the
//!   visiting order. Keys need not be unique, which lets MIMIC treat every
//!   position as an independent discrete variable.

use crate::random::shuffle;
use rand::Rng;

/// Returns `true` if `perm` contains each of `0..n` exactly once.
pub fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    shuffle(&mut perm, rng);
    perm
}

/// Uniformly random sort-key vector: `ranges[i]` bounds key `i`.
pub fn random_sort_keys<R: Rng>(ranges: &[usize], rng: &mut R) -> Vec<usize> {
    ranges.iter().map(|&r| rng.random_range(0..r)).collect()
}

/// Decodes a sort-key vector into the permutation it induces.
///
/// City indices are stably sorted by key, so ties keep ascending index
/// order.
pub fn decode_sort_keys(keys: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by_key(|&i| keys[i]);
    order
}
