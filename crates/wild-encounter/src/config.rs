//! Configuration for a sampling run.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Encounters rolled per run unless configured otherwise.
pub const DEFAULT_REPETITIONS: usize = 1000;

/// Configuration for a sampling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerConfig {
    /// RNG seed for a reproducible run; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Number of encounters to roll.
    pub repetitions: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl SamplerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of encounters to roll.
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Build the run's random number generator.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
