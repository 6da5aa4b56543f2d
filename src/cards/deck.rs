//! The starting deck.

use super::card::Card;
use crate::core::config::STARTING_DECK_COSTS;

/// Build the 20-card deck every player starts a match with.
#[must_use]
pub fn starting_deck() -> Vec<Card> {
    STARTING_DECK_COSTS.iter().copied().map(Card::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_deck() {
        let deck = starting_deck();
        assert_eq!(deck.len(), 20);
        assert_eq!(deck.iter().filter(|c| c.is_dud()).count(), 2);
        assert_eq!(deck.iter().map(|c| c.mana_cost()).max(), Some(8));
        assert_eq!(deck.iter().filter(|c| c.mana_cost() == 3).count(), 4);
    }

    #[test]
    fn test_starting_deck_is_fresh_each_call() {
        let mut first = starting_deck();
        first.clear();
        assert_eq!(starting_deck().len(), 20);
    }
}
