//! Serializable player status.

use serde::{Deserialize, Serialize};

/// Point-in-time view of a player, for narration and reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub health: i64,
    pub mana: u32,
    pub hand_size: usize,
    pub deck_size: usize,
}

impl std::fmt::Display for PlayerSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [health {}, mana {}, hand {}, deck {}]",
            self.name, self.health, self.mana, self.hand_size, self.deck_size
        )
    }
}
