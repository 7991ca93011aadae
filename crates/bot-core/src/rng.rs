//! Deterministic policy RNG.
//!
//! Randomised predictors draw from a `PolicyRng` seeded once per agent, so a
//! run with the same seed and the same observations emits the same actions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded `SmallRng` wrapper owned by one agent.
#[derive(Clone, Debug)]
pub struct PolicyRng(SmallRng);

impl PolicyRng {
    pub fn new(seed: u64) -> Self {
        PolicyRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream for the `n`-th episode (or any other
    /// sub-run) without disturbing the parent's sequence.
    pub fn child(&mut self, n: u64) -> PolicyRng {
        let seed: u64 = self.0.r#gen::<u64>() ^ n.wrapping_mul(MIXING_CONSTANT);
        PolicyRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
