//! Seedable randomness for dealing, cutting and random strategies.
//!
//! Nothing in the crate touches a global RNG. An `Engine` owns one stream
//! seeded from `GameConfig::seed` and hands each new game a fork; a
//! strategy derives its own stream from a seed and a name.
//!
//! ```
//! use cribbage_engine::core::GameRng;
//!
//! let mut engine_rng = GameRng::new(42);
//! let first_game = engine_rng.fork();
//! let second_game = engine_rng.fork();
//! assert_ne!(first_game.seed(), second_game.seed());
//! ```

use std::hash::{Hash, Hasher};
use std::ops::Range;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Golden-ratio step between fork seeds.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the next child stream. The n-th fork of a seed is always the same.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STEP)))
    }

    /// Derive a named stream from this stream's seed, independent of how much
    /// of this stream has been consumed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform index in `range`. Panics on an empty range.
    pub fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform element of `slice`, `None` if empty.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(rng: &mut GameRng) -> Vec<usize> {
        (0..12).map(|_| rng.gen_range_usize(0..52)).collect()
    }

    #[test]
    fn test_same_seed_same_draws() {
        assert_eq!(draw(&mut GameRng::new(42)), draw(&mut GameRng::new(42)));
        assert_ne!(draw(&mut GameRng::new(1)), draw(&mut GameRng::new(2)));
    }

    #[test]
    fn test_forks() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        // consuming the parent does not change its forks
        a.gen_range_usize(0..10);
        let mut fork_a = a.fork();
        let mut fork_b = b.fork();
        assert_eq!(fork_a.seed(), fork_b.seed());
        assert_eq!(draw(&mut fork_a), draw(&mut fork_b));

        assert_ne!(a.fork().seed(), fork_a.seed());
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);

        assert_eq!(rng.for_context("random").seed(), GameRng::new(42).for_context("random").seed());
        assert_ne!(
            draw(&mut rng.for_context("random")),
            draw(&mut rng.for_context("deal"))
        );
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(7);
        let items = [3, 5, 8];

        for _ in 0..20 {
            let picked = rng.choose(&items).copied();
            assert!(picked.is_some_and(|p| items.contains(&p)));
        }
        assert!(rng.choose::<u8>(&[]).is_none());
    }
}
