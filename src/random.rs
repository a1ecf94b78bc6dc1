//! Random number generator construction.
//!
//! Every runner owns its own generator, built from the seed in its
//! configuration. Nothing in this crate touches a shared global RNG except
//! [`fresh_seed`], which is only used when no seed was configured.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from OS entropy when `None`.
pub fn rng_from_option(seed: Option<u64>) -> StdRng {
    create_rng(seed.unwrap_or_else(fresh_seed))
}

/// Draws a seed from the thread-local generator.
pub fn fresh_seed() -> u64 {
    rand::random()
}

/// Fisher-Yates shuffle in place.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
