//! Seeded run RNG.
//!
//! The configured seed is held as an explicit value for the lifetime of a run
//! instead of being written into process-wide state.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRng {
    seed: u64,
}

impl RunRng {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generator seeded directly from the configured seed.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}
