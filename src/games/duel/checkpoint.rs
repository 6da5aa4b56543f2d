//! Mid-match checkpoints.

use serde::{Deserialize, Serialize};

use super::game::TurnPhase;
use crate::core::rng::GameRngState;
use crate::core::seat::{Seat, Seats};
use crate::player::Player;

/// Complete state of a match, including the RNG stream position.
///
/// Produced by `GamePlay::checkpoint` and consumed by `GamePlay::resume`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCheckpoint {
    pub players: Seats<Player>,
    /// Seat whose turn it is.
    pub current: Seat,
    pub phase: TurnPhase,
    /// Turns started so far.
    pub turn: u32,
    pub cards_played: Seats<u32>,
    pub rng: GameRngState,
}

#[cfg(test)]
mod tests {
    use crate::core::config::MatchConfig;
    use crate::games::duel::GamePlay;

    #[test]
    fn test_checkpoint_serde() {
        let mut game = GamePlay::from_names("Alice", "Bob", MatchConfig::default());
        game.play_turn().unwrap();
        let checkpoint = game.checkpoint();

        let json = serde_json::to_string(&checkpoint).unwrap();
        let deserialized: super::MatchCheckpoint = serde_json::from_str(&json).unwrap();

        assert_eq!(checkpoint, deserialized);
        assert_eq!(deserialized.turn, 1);
        assert_eq!(deserialized.players[deserialized.current].name(), "Bob");
    }
}
