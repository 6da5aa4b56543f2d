//! Game faults.
//!
//! Empty decks, empty hands and full hands are ordinary game states. The
//! variants here are precondition violations: reaching one through normal
//! turn flow means the selection logic or the caller is wrong.

use thiserror::Error;

/// Faults raised by player and match operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A card was applied that costs more than the player's current mana.
    #[error("insufficient mana: card costs {required}, player has {available}")]
    InsufficientMana { required: u32, available: u32 },

    /// A card was applied that the player does not hold.
    #[error("no card with mana cost {mana_cost} in hand")]
    CardNotInHand { mana_cost: u32 },

    /// The match hit its turn cap without a winner.
    #[error("no winner after {turns} turns")]
    TurnLimitExceeded { turns: u32 },
}

/// Result alias for game operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InsufficientMana {
            required: 3,
            available: 1,
        };
        assert_eq!(err.to_string(), "insufficient mana: card costs 3, player has 1");

        let err = GameError::TurnLimitExceeded { turns: 10 };
        assert_eq!(err.to_string(), "no winner after 10 turns");
    }
}
