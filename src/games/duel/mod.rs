//! Two-player mana duel.
//!
//! - Each player starts with 30 health and the fixed 20-card deck
//! - Each turn: roll 1-9 mana, draw a card, then play the most expensive
//!   affordable card until nothing is affordable
//! - A played card deals damage equal to its cost
//! - Drawing from an empty deck costs 1 health
//! - The match ends when a player drops below 1 health

mod checkpoint;
mod game;
mod report;

pub use checkpoint::MatchCheckpoint;
pub use game::{GamePlay, TurnPhase};
pub use report::MatchReport;
