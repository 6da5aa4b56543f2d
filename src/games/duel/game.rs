//! Duel turn loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, info};

use super::checkpoint::MatchCheckpoint;
use super::report::MatchReport;
use crate::core::config::MatchConfig;
use crate::core::error::{GameError, GameResult};
use crate::core::rng::{GameRng, RandomSource};
use crate::core::seat::{Seat, Seats};
use crate::player::{DrawOutcome, Player};

/// Where the match is within the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for mana refill and draw.
    TurnStart,
    /// Current player is playing cards.
    TurnBody,
    /// Current player is done; roles swap next.
    TurnEnd,
    /// A winner exists. Terminal.
    GameOver(Seat),
}

/// A two-player match.
///
/// Both players live in fixed seats for the whole match. A cursor marks the
/// current seat; ending a turn flips the cursor, so player state is never
/// copied or moved.
///
/// All randomness comes from the injected `RandomSource`, so a seeded or
/// scripted source makes the whole match deterministic.
#[derive(Clone, Debug)]
pub struct GamePlay<R: RandomSource = GameRng> {
    players: Seats<Player>,
    current: Seat,
    rng: R,
    config: MatchConfig,
    phase: TurnPhase,
    turn: u32,
    cards_played: Seats<u32>,
}

impl GamePlay<GameRng> {
    /// Build a match between two named players, seeded from `config.seed`.
    pub fn from_names(first: impl Into<String>, second: impl Into<String>, config: MatchConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_config(Player::new(first), Player::new(second), rng, config)
    }

    /// Capture everything needed to continue this match later.
    #[must_use]
    pub fn checkpoint(&self) -> MatchCheckpoint {
        MatchCheckpoint {
            players: self.players.clone(),
            current: self.current,
            phase: self.phase,
            turn: self.turn,
            cards_played: self.cards_played.clone(),
            rng: self.rng.state(),
        }
    }

    /// Continue a match from a checkpoint.
    ///
    /// Players keep their hands and decks; no opening hands are drawn.
    pub fn resume(checkpoint: MatchCheckpoint, config: MatchConfig) -> Self {
        debug!(turn = checkpoint.turn, seat = %checkpoint.current, "match resumed");
        Self {
            players: checkpoint.players,
            current: checkpoint.current,
            rng: GameRng::from_state(&checkpoint.rng),
            config,
            phase: checkpoint.phase,
            turn: checkpoint.turn,
            cards_played: checkpoint.cards_played,
        }
    }
}

impl<R: RandomSource> GamePlay<R> {
    /// Build a match with the default configuration.
    ///
    /// `first` takes the first turn. Both players draw their opening hands.
    pub fn new(first: Player, second: Player, rng: R) -> Self {
        Self::with_config(first, second, rng, MatchConfig::default())
    }

    /// Build a match with an explicit configuration.
    pub fn with_config(mut first: Player, mut second: Player, mut rng: R, config: MatchConfig) -> Self {
        first.init_for_game(&mut rng);
        second.init_for_game(&mut rng);

        Self {
            players: Seats::new(first, second),
            current: Seat::First,
            rng,
            config,
            phase: TurnPhase::TurnStart,
            turn: 0,
            cards_played: Seats::new(0, 0),
        }
    }

    // === Accessors ===

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    /// Player waiting for their turn.
    #[must_use]
    pub fn opponent(&self) -> &Player {
        &self.players[self.current.other()]
    }

    /// Mutable access to the current player.
    pub fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    /// Mutable access to the opponent.
    pub fn opponent_mut(&mut self) -> &mut Player {
        &mut self.players[self.current.other()]
    }

    /// Player in a given seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Turns started so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The match's random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Winner, once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.phase {
            TurnPhase::GameOver(seat) => Some(&self.players[seat]),
            _ => None,
        }
    }

    // === Turn flow ===

    /// Refill the current player's mana and draw one card.
    pub fn begin_turn(&mut self) -> DrawOutcome {
        self.turn += 1;
        let player = &mut self.players[self.current];
        player.fill_mana(&mut self.rng);
        let outcome = player.draw_card(&mut self.rng);

        debug!(
            turn = self.turn,
            player = %player.name(),
            mana = player.mana(),
            hand_size = player.hand_size(),
            deck_size = player.deck_size(),
            "turn started"
        );
        self.phase = TurnPhase::TurnBody;
        outcome
    }

    /// Play best affordable cards until none is left or a winner exists.
    ///
    /// The win check runs after every card, so remaining mana is not spent
    /// once the match is decided.
    pub fn play_turn_body(&mut self) -> GameResult<Option<Seat>> {
        loop {
            let (current, opponent) = self.players.pair_mut(self.current);
            if current.play_one_turn_step(opponent)?.is_none() {
                self.phase = TurnPhase::TurnEnd;
                return Ok(None);
            }
            self.cards_played[self.current] += 1;

            if let Some(seat) = self.check_winner() {
                self.finish(seat);
                return Ok(Some(seat));
            }
        }
    }

    /// Swap current and opponent.
    pub fn end_turn(&mut self) {
        self.current = self.current.other();
        if !matches!(self.phase, TurnPhase::GameOver(_)) {
            self.phase = TurnPhase::TurnStart;
        }
    }

    /// Winner as seen from the current roles.
    ///
    /// A current player below 1 health loses first; otherwise an opponent
    /// below 1 health loses.
    #[must_use]
    pub fn check_winner(&self) -> Option<Seat> {
        if !self.current().is_alive() {
            Some(self.current.other())
        } else if !self.opponent().is_alive() {
            Some(self.current)
        } else {
            None
        }
    }

    /// Run one full turn: begin, play, check, swap.
    ///
    /// Does nothing once the match is over and returns the recorded winner.
    pub fn play_turn(&mut self) -> GameResult<Option<Seat>> {
        if let TurnPhase::GameOver(seat) = self.phase {
            return Ok(Some(seat));
        }

        let span = debug_span!("turn", number = self.turn + 1, seat = %self.current);
        let _enter = span.enter();

        self.begin_turn();
        let mut winner = self.play_turn_body()?;
        if winner.is_none() {
            // Bleed-out during the draw can decide a match with no card played.
            winner = self.check_winner();
            if let Some(seat) = winner {
                self.finish(seat);
            }
        }
        self.end_turn();
        Ok(winner)
    }

    /// Play turns until a winner exists and return the winning player.
    ///
    /// Fails with `TurnLimitExceeded` if `config.max_turns` turns pass
    /// without a winner.
    pub fn play(&mut self) -> GameResult<&Player> {
        let winner = loop {
            if let TurnPhase::GameOver(seat) = self.phase {
                break seat;
            }
            if self.turn >= self.config.max_turns {
                return Err(GameError::TurnLimitExceeded { turns: self.turn });
            }
            self.play_turn()?;
        };
        Ok(&self.players[winner])
    }

    /// Summary of a finished match.
    #[must_use]
    pub fn report(&self) -> Option<MatchReport> {
        let TurnPhase::GameOver(winner) = self.phase else {
            return None;
        };
        Some(MatchReport {
            winner,
            winner_name: self.players[winner].name().to_string(),
            turns: self.turn,
            cards_played: self.cards_played.clone(),
            players: Seats::new(
                self.players[Seat::First].snapshot(),
                self.players[Seat::Second].snapshot(),
            ),
        })
    }

    fn finish(&mut self, winner: Seat) {
        self.phase = TurnPhase::GameOver(winner);
        info!(
            winner = %self.players[winner].name(),
            loser = %self.players[winner.other()].name(),
            turn = self.turn,
            "match over"
        );
    }
}
