//! End-of-match summary.

use serde::{Deserialize, Serialize};

use crate::core::seat::{Seat, Seats};
use crate::player::PlayerSnapshot;

/// Outcome of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Seat of the winning player.
    pub winner: Seat,
    pub winner_name: String,
    /// Turns started, across both players.
    pub turns: u32,
    /// Cards each seat played, duds included.
    pub cards_played: Seats<u32>,
    /// Final state of both players.
    pub players: Seats<PlayerSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;

    #[test]
    fn test_report_serde() {
        let report = MatchReport {
            winner: Seat::Second,
            winner_name: "Bob".to_string(),
            turns: 17,
            cards_played: Seats::new(9, 11),
            players: Seats::new(Player::new("Alice").snapshot(), Player::new("Bob").snapshot()),
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: MatchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
        assert_eq!(deserialized.players[Seat::Second].name, "Bob");
    }
}
