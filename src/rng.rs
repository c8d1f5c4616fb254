//! Deterministic random number generation
//!
//! Each city gets its own ChaCha stream seeded from the sum of the code points
//! in its name. Anagrams share a stream, which is acceptable here.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed for a city name: sum of its Unicode code points.
pub fn city_seed(city: &str) -> u64 {
    city.chars().map(|c| c as u64).sum()
}

/// Fresh generator for a city; the same name always yields the same stream.
pub fn city_rng(city: &str) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(city_seed(city))
}

/// Generator for values that must differ on every recomputation.
pub fn fresh_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}
