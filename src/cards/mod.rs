//! Cards and the starting deck.
//!
//! ## Key Types
//!
//! - `Card`: Immutable mana-cost value
//! - `Hand`: Inline storage for a player's hand
//! - `starting_deck`: The fixed 20-card deck

pub mod card;
pub mod deck;

use smallvec::SmallVec;

pub use card::Card;
pub use deck::starting_deck;

/// A player's hand.
///
/// Inline capacity covers the largest hand normal play can produce
/// (`MAX_HAND_SIZE` plus the one-card grace).
pub type Hand = SmallVec<[Card; 6]>;
