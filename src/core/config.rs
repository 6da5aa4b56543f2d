//! Game rules and match configuration.
//!
//! The rules of the duel are fixed constants. `MatchConfig` only carries the
//! knobs that control how a match is run, not how the game is played.

use serde::{Deserialize, Serialize};

/// Hand size above which newly drawn cards are discarded.
///
/// A draw is discarded only when the hand already holds *more* than this many
/// cards, so a hand can reach `MAX_HAND_SIZE + 1`.
pub const MAX_HAND_SIZE: usize = 5;

/// Upper bound on mana slots. A turn rolls mana in `1..MAX_MANA_SLOTS`.
pub const MAX_MANA_SLOTS: u32 = 10;

/// Cards drawn by each player before the first turn.
pub const STARTING_HAND_SIZE: usize = 3;

/// Health each player starts with.
pub const STARTING_HEALTH: i64 = 30;

/// Mana costs of the 20-card deck every player starts with.
pub const STARTING_DECK_COSTS: [u32; 20] = [0, 0, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 5, 5, 6, 6, 7, 8];

/// Match-level configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Turns after which a match is abandoned.
    /// Guards against pathological random sequences.
    pub max_turns: u32,

    /// Seed for the match RNG when the match builds its own.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: 10_000,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Set the turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
