//! A duelist: deck, hand, health and mana.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::snapshot::PlayerSnapshot;
use crate::cards::{starting_deck, Card, Hand};
use crate::core::config::{MAX_HAND_SIZE, MAX_MANA_SLOTS, STARTING_HAND_SIZE, STARTING_HEALTH};
use crate::core::error::{GameError, GameResult};
use crate::core::rng::RandomSource;

/// What a single draw did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// The card went into the hand.
    Drawn(Card),
    /// The hand was overloaded; the card left the deck and was lost.
    Discarded(Card),
    /// The deck was empty; the player lost 1 health instead.
    BledOut,
}

/// One side of a duel.
///
/// A player starts with `STARTING_HEALTH`, zero mana, the starting deck and
/// an empty hand. `init_for_game` draws the opening hand.
///
/// Health is never clamped: it can go negative, which is how a finished
/// player is recognised.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    health: i64,
    mana: u32,
    deck: Vec<Card>,
    hand: Hand,
}

impl Player {
    /// Create a player with the starting deck and an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: STARTING_HEALTH,
            mana: 0,
            deck: starting_deck(),
            hand: Hand::new(),
        }
    }

    /// Draw the opening hand. Call once before the first turn.
    pub fn init_for_game<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..STARTING_HAND_SIZE {
            self.draw_card(rng);
        }
    }

    // === Accessors ===

    /// Player label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health. May be zero or negative.
    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }

    /// Mana left this turn.
    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    /// Undrawn cards.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Cards available to play.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Health of at least 1.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health >= 1
    }

    // === Scenario setup ===

    /// Replace the hand.
    pub fn set_hand(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand = cards.into_iter().collect();
    }

    /// Replace the deck.
    pub fn set_deck(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.deck = cards.into_iter().collect();
    }

    /// Overwrite the current mana.
    pub fn set_mana(&mut self, mana: u32) {
        self.mana = mana;
    }

    /// Overwrite the current health.
    pub fn set_health(&mut self, health: i64) {
        self.health = health;
    }

    // === Turn operations ===

    /// Draw one random card from the deck.
    ///
    /// - Empty deck: the player bleeds out for 1 health.
    /// - Hand holding more than `MAX_HAND_SIZE` cards: the card is removed
    ///   from the deck and discarded.
    /// - Otherwise the card joins the hand.
    pub fn draw_card<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> DrawOutcome {
        if self.deck.is_empty() {
            self.health -= 1;
            warn!(player = %self.name, health = self.health, "bleeding out: deck is empty");
            return DrawOutcome::BledOut;
        }

        let index = rng.uniform_int(self.deck.len());
        debug_assert!(index < self.deck.len(), "random source returned out-of-range index");
        let card = self.deck.remove(index);
        debug!(player = %self.name, mana_cost = card.mana_cost(), deck_size = self.deck.len(), "picked card from deck");

        // Strictly greater: a hand at MAX_HAND_SIZE still takes one more card.
        if self.hand.len() > MAX_HAND_SIZE {
            warn!(player = %self.name, mana_cost = card.mana_cost(), "hand overloaded, card discarded");
            DrawOutcome::Discarded(card)
        } else {
            self.hand.push(card);
            debug!(player = %self.name, hand_size = self.hand.len(), "hand increased");
            DrawOutcome::Drawn(card)
        }
    }

    /// Roll this turn's mana in `1..MAX_MANA_SLOTS`. Not cumulative.
    pub fn fill_mana<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let slots = (MAX_MANA_SLOTS - 1) as usize;
        let roll = rng.uniform_int(slots);
        debug_assert!(roll < slots, "random source returned out-of-range mana roll");
        self.mana = roll as u32 + 1;
        debug!(player = %self.name, mana = self.mana, "mana filled");
        self.mana
    }

    /// The most expensive card in hand that current mana can pay for.
    ///
    /// Ties go to the first such card in hand order. Returns `None` when the
    /// hand is empty or nothing is affordable.
    #[must_use]
    pub fn select_best_affordable_card(&self) -> Option<Card> {
        let mut best: Option<Card> = None;
        for &card in &self.hand {
            if card.mana_cost() > self.mana {
                continue;
            }
            match best {
                Some(current) if current.mana_cost() >= card.mana_cost() => {}
                _ => best = Some(card),
            }
        }
        best
    }

    /// Whether any card in hand is affordable.
    #[must_use]
    pub fn has_playable_card(&self) -> bool {
        self.select_best_affordable_card().is_some()
    }

    /// Play `card` against `opponent`.
    ///
    /// Deals damage equal to the card's cost, removes the card from the hand
    /// and spends the mana. Nothing changes on either side if the card costs
    /// more than the current mana or is not in hand.
    pub fn apply_card(&mut self, opponent: &mut Player, card: Card) -> GameResult<()> {
        if card.mana_cost() > self.mana {
            return Err(GameError::InsufficientMana {
                required: card.mana_cost(),
                available: self.mana,
            });
        }
        let position = self
            .hand
            .iter()
            .position(|held| *held == card)
            .ok_or(GameError::CardNotInHand {
                mana_cost: card.mana_cost(),
            })?;

        if card.is_dud() {
            debug!(player = %self.name, "dud card played");
        }

        opponent.receive_damage(card.damage());
        self.hand.remove(position);
        self.mana -= card.mana_cost();

        debug!(player = %self.name, mana_cost = card.mana_cost(), mana = self.mana, "card played");
        debug!(snapshot = %opponent.snapshot(), "opponent status");
        Ok(())
    }

    /// Select the best affordable card and play it.
    ///
    /// Returns the card played, or `None` (with no effect) if nothing is
    /// affordable.
    pub fn play_one_turn_step(&mut self, opponent: &mut Player) -> GameResult<Option<Card>> {
        match self.select_best_affordable_card() {
            Some(card) => {
                self.apply_card(opponent, card)?;
                Ok(Some(card))
            }
            None => Ok(None),
        }
    }

    /// Lose `amount` health.
    pub fn receive_damage(&mut self, amount: i64) {
        self.health -= amount;
        debug!(player = %self.name, health = self.health, "health decreased");
    }

    /// Point-in-time view of this player.
    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            name: self.name.clone(),
            health: self.health,
            mana: self.mana,
            hand_size: self.hand.len(),
            deck_size: self.deck.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;

    fn cards(costs: &[u32]) -> Vec<Card> {
        costs.iter().copied().map(Card::new).collect()
    }

    /// Always picks index 0.
    struct FirstIndex;

    impl RandomSource for FirstIndex {
        fn uniform_int(&mut self, _bound: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_new_player() {
        let player = Player::new("Alice");
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.health(), 30);
        assert_eq!(player.mana(), 0);
        assert_eq!(player.deck_size(), 20);
        assert_eq!(player.hand_size(), 0);
    }

    #[test]
    fn test_init_for_game() {
        let mut rng = GameRng::new(42);
        let mut player = Player::new("Alice");
        player.init_for_game(&mut rng);

        assert_eq!(player.hand_size(), 3);
        assert_eq!(player.deck_size(), 17);
        assert_eq!(player.health(), 30);
        assert_eq!(player.mana(), 0);
    }

    #[test]
    fn test_draw_takes_chosen_index() {
        let mut player = Player::new("Alice");
        player.set_deck(cards(&[7, 2, 5]));

        let outcome = player.draw_card(&mut FirstIndex);

        assert_eq!(outcome, DrawOutcome::Drawn(Card::new(7)));
        assert_eq!(player.deck(), cards(&[2, 5]).as_slice());
        assert_eq!(player.hand(), cards(&[7]).as_slice());
    }

    #[test]
    fn test_draw_at_max_hand_size_still_adds() {
        let mut player = Player::new("Alice");
        player.set_hand(cards(&[1, 1, 1, 1, 1]));

        let outcome = player.draw_card(&mut FirstIndex);

        assert!(matches!(outcome, DrawOutcome::Drawn(_)));
        assert_eq!(player.hand_size(), 6);
    }

    #[test]
    fn test_draw_above_max_hand_size_discards() {
        let mut player = Player::new("Alice");
        player.set_hand(cards(&[1, 1, 1, 1, 1, 1]));

        let outcome = player.draw_card(&mut FirstIndex);

        assert_eq!(outcome, DrawOutcome::Discarded(Card::new(0)));
        assert_eq!(player.hand_size(), 6);
        assert_eq!(player.deck_size(), 19);
    }

    #[test]
    fn test_draw_from_empty_deck_bleeds() {
        let mut player = Player::new("Alice");
        player.set_deck(Vec::new());

        assert_eq!(player.draw_card(&mut FirstIndex), DrawOutcome::BledOut);
        assert_eq!(player.health(), 29);
        assert_eq!(player.hand_size(), 0);
    }

    #[test]
    fn test_fill_mana_range() {
        let mut rng = GameRng::new(1);
        let mut player = Player::new("Alice");
        for _ in 0..200 {
            let mana = player.fill_mana(&mut rng);
            assert!((1..=9).contains(&mana));
            assert_eq!(player.mana(), mana);
        }
    }

    #[test]
    fn test_fill_mana_is_not_cumulative() {
        let mut player = Player::new("Alice");
        player.set_mana(8);
        assert_eq!(player.fill_mana(&mut FirstIndex), 1);
    }

    #[test]
    fn test_select_prefers_first_of_equal_cost() {
        let mut player = Player::new("Alice");
        player.set_hand(cards(&[4, 2, 4]));
        player.set_mana(5);
        assert_eq!(player.select_best_affordable_card(), Some(Card::new(4)));
    }

    #[test]
    fn test_select_with_empty_hand() {
        let mut player = Player::new("Alice");
        player.set_mana(9);
        assert_eq!(player.select_best_affordable_card(), None);
        assert!(!player.has_playable_card());
    }

    #[test]
    fn test_apply_card_removes_one_copy() {
        let mut player = Player::new("Alice");
        let mut opponent = Player::new("Bob");
        player.set_hand(cards(&[3, 5, 3]));
        player.set_mana(7);

        player.apply_card(&mut opponent, Card::new(3)).unwrap();

        assert_eq!(player.hand(), cards(&[5, 3]).as_slice());
        assert_eq!(player.mana(), 4);
        assert_eq!(opponent.health(), 27);
    }

    #[test]
    fn test_apply_card_not_in_hand() {
        let mut player = Player::new("Alice");
        let mut opponent = Player::new("Bob");
        player.set_hand(cards(&[2]));
        player.set_mana(5);

        let err = player.apply_card(&mut opponent, Card::new(4)).unwrap_err();

        assert_eq!(err, GameError::CardNotInHand { mana_cost: 4 });
        assert_eq!(player.mana(), 5);
        assert_eq!(opponent.health(), 30);
    }

    #[test]
    fn test_play_step_without_affordable_card() {
        let mut player = Player::new("Alice");
        let mut opponent = Player::new("Bob");
        player.set_hand(cards(&[6, 8]));
        player.set_mana(3);

        assert_eq!(player.play_one_turn_step(&mut opponent), Ok(None));
        assert_eq!(player.hand_size(), 2);
        assert_eq!(player.mana(), 3);
        assert_eq!(opponent.health(), 30);
    }

    #[test]
    fn test_dud_deals_no_damage() {
        let mut player = Player::new("Alice");
        let mut opponent = Player::new("Bob");
        player.set_hand(cards(&[0]));
        player.set_mana(1);

        assert_eq!(player.play_one_turn_step(&mut opponent), Ok(Some(Card::new(0))));
        assert_eq!(opponent.health(), 30);
        assert_eq!(player.mana(), 1);
        assert_eq!(player.hand_size(), 0);
    }

    /// Returns a value past any bound.
    struct OutOfRange;

    impl RandomSource for OutOfRange {
        fn uniform_int(&mut self, bound: usize) -> usize {
            bound
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out-of-range mana roll")]
    fn test_fill_mana_rejects_out_of_range_roll() {
        let mut player = Player::new("Alice");
        player.fill_mana(&mut OutOfRange);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out-of-range index")]
    fn test_draw_rejects_out_of_range_index() {
        let mut player = Player::new("Alice");
        player.draw_card(&mut OutOfRange);
    }

    #[test]
    fn test_health_goes_negative() {
        let mut player = Player::new("Alice");
        player.set_health(2);
        player.receive_damage(5);
        assert_eq!(player.health(), -3);
        assert!(!player.is_alive());
    }
}
