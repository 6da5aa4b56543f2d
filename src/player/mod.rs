//! Players: deck, hand, health, mana and the per-turn card choice.
//!
//! ## Turn Operations
//!
//! - `draw_card`: Random draw with bleed-out and overload rules
//! - `fill_mana`: Fresh mana roll for the turn
//! - `select_best_affordable_card`: Greedy pick of the most damaging playable card
//! - `apply_card`: Spend mana and deal damage with an explicit card
//! - `play_one_turn_step`: Select and apply in one call

mod player;
mod snapshot;

pub use player::{DrawOutcome, Player};
pub use snapshot::PlayerSnapshot;
