//! Core types: seats, randomness, rules constants, errors.
//!
//! Everything the player and match logic depend on but that carries no game
//! flow of its own.

pub mod config;
pub mod error;
pub mod rng;
pub mod seat;

pub use config::{
    MatchConfig, MAX_HAND_SIZE, MAX_MANA_SLOTS, STARTING_DECK_COSTS, STARTING_HAND_SIZE, STARTING_HEALTH,
};
pub use error::{GameError, GameResult};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use seat::{Seat, Seats};
