//! Seedable random sources.
//!
//! Every stochastic operator in this crate takes `&mut R where R: Rng`, so
//! any generator can be injected. [`create_rng`] is the default used by
//! [`EvolutionEngine::from_config`](crate::ga::EvolutionEngine::from_config)
//! and by the tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a seed.
///
/// Two generators created from the same seed produce identical streams,
/// which makes whole runs reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
