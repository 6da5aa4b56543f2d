//! Injectable randomness for mana rolls and card draws.
//!
//! ## Key Features
//!
//! - **Injectable**: Game logic only sees the `RandomSource` trait
//! - **Deterministic**: Same seed produces identical matches
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use mana_duel::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(rng1.uniform_int(20), rng2.uniform_int(20));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform integers used by the game rules.
///
/// Every random decision in a match (which deck card is drawn, how much mana
/// a turn gets) goes through this trait. Substituting a deterministic source
/// makes the whole match deterministic.
pub trait RandomSource {
    /// Return an integer in `[0, bound)`.
    ///
    /// `bound` must be positive.
    fn uniform_int(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_int(&mut self, bound: usize) -> usize {
        (**self).uniform_int(bound)
    }
}

/// Seeded RNG backing real matches.
///
/// Uses ChaCha8 for speed while keeping a reproducible, checkpointable stream.
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

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn uniform_int(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "uniform_int bound must be positive");
        self.inner.gen_range(0..bound)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
