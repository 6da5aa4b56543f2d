//! Card values.
//!
//! A card is nothing but its mana cost: playing it spends that much mana and
//! deals that much damage. Cards are plain `Copy` values; two cards with the
//! same cost are interchangeable.

use serde::{Deserialize, Serialize};

/// A card with a fixed mana cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    mana_cost: u32,
}

impl Card {
    /// Create a card with the given cost.
    #[must_use]
    pub const fn new(mana_cost: u32) -> Self {
        Self { mana_cost }
    }

    /// Mana needed to play this card.
    #[must_use]
    pub const fn mana_cost(self) -> u32 {
        self.mana_cost
    }

    /// Damage dealt to the opponent when played. Always equals the cost.
    #[must_use]
    pub fn damage(self) -> i64 {
        i64::from(self.mana_cost)
    }

    /// Zero-cost cards are always playable and deal no damage.
    #[must_use]
    pub const fn is_dud(self) -> bool {
        self.mana_cost == 0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.mana_cost)
    }
}
