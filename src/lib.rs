//! # mana-duel
//!
//! A two-player, turn-based mana-and-damage card game simulator.
//!
//! ## Rules
//!
//! 1. **Mana**: Each turn the current player rolls a fresh mana budget of 1-9.
//!
//! 2. **Draw**: Then draws one random card from their deck. An empty deck
//!    costs 1 health instead; an overloaded hand discards the draw.
//!
//! 3. **Play**: The player repeatedly plays the most expensive card they can
//!    afford. A card deals damage equal to its mana cost.
//!
//! 4. **Win**: The match ends as soon as a player drops below 1 health.
//!
//! ## Architecture
//!
//! - **Injected Randomness**: Every random decision goes through
//!   `RandomSource`, so a seeded `GameRng` or a scripted source replays a
//!   match exactly.
//!
//! - **Seat Swap**: Players sit in fixed seats; ending a turn flips which
//!   seat is current instead of moving player state.
//!
//! - **Narration**: Turn events are emitted with `tracing`. The library never
//!   installs a subscriber.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, rule constants, match configuration, errors
//! - `cards`: Card values and the starting deck
//! - `player`: Player state and per-turn operations
//! - `games`: The duel turn loop and match reports

pub mod cards;
pub mod core;
pub mod games;
pub mod player;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameResult, GameRng, GameRngState, MatchConfig, RandomSource, Seat, Seats, MAX_HAND_SIZE,
    MAX_MANA_SLOTS, STARTING_HAND_SIZE, STARTING_HEALTH,
};

pub use crate::cards::{starting_deck, Card, Hand};

pub use crate::player::{DrawOutcome, Player, PlayerSnapshot};

pub use crate::games::duel::{GamePlay, MatchCheckpoint, MatchReport, TurnPhase};
