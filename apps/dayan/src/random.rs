//! # Random Split Provider
//!
//! The uniform fallback used when no interactive or scripted split point
//! is supplied. This is the only place randomness enters the system; the
//! core engine itself is fully deterministic.

use dayan_core::SplitProvider;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses split points uniformly from [1, pool - 1].
#[derive(Debug)]
pub struct UniformSplit {
    rng: StdRng,
}

impl UniformSplit {
    /// A provider seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A provider with a fixed seed, for reproducible casts.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SplitProvider for UniformSplit {
    fn split_point(&mut self, pool: u32) -> u32 {
        if pool <= 2 {
            1
        } else {
            self.rng.random_range(1..pool)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_stay_in_range() {
        let mut provider = UniformSplit::seeded(7);
        for _ in 0..200 {
            let split = provider.split_point(49);
            assert!((1..=48).contains(&split));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = UniformSplit::seeded(42);
        let mut b = UniformSplit::seeded(42);
        for pool in [49, 44, 40, 36, 31, 27] {
            assert_eq!(a.split_point(pool), b.split_point(pool));
        }
    }

    #[test]
    fn tiny_pool_splits_at_one() {
        let mut provider = UniformSplit::seeded(1);
        assert_eq!(provider.split_point(2), 1);
    }
}
