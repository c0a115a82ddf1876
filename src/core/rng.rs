//! Seeded randomness for board layouts.
//!
//! A layout is drawn by picking icons and then permuting the filled cells.
//! Both draws come from one ChaCha8 stream, so a seed pins the whole board,
//! and unseeded games keep the OS-drawn seed for replay.
//!
//! ```
//! use rust_onet::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random stream behind `Board::generate`.
///
/// ChaCha8 output does not depend on the platform, so a seeded layout is the
/// same everywhere.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Stream for a fixed layout seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The drawn seed is kept so a surprising board can still be reproduced
    /// from logs.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen::<u64>();
        Self::new(seed)
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index, used to pick cells.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform icon draw.
    pub fn gen_range_u16(&mut self, range: std::ops::Range<u16>) -> u16 {
        self.inner.gen_range(range)
    }

    /// Permute tiles in place. Every arrangement is equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
