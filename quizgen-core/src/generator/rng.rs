use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::Seed;

/// Build the per-request generator. A seed makes every draw reproducible;
/// without one the generator is seeded from OS entropy.
pub fn rng_for_seed(seed: Option<Seed>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.to_u64()),
        None => StdRng::from_entropy(),
    }
}
