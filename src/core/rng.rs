//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences for different purposes
//!   (dice rolls vs. card draws), so adding a card draw does not shift
//!   every subsequent dice roll.
//!
//! ```
//! use rust_estate::core::GameRng;
//!
//! let root = GameRng::new(42);
//! let mut dice = root.for_context("dice");
//! let mut cards = root.for_context("cards");
//!
//! let face = dice.roll_die(6);
//! assert!((1..=6).contains(&face));
//! assert!(cards.choose(&[150, -75]).is_some());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Roll one die with `faces` sides, returning `1..=faces`.
    pub fn roll_die(&mut self, faces: u8) -> u8 {
        self.inner.gen_range(1..=faces.max(1))
    }

    /// Choose a random element from a slice, each equally likely.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
