use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::logger::ActionRecord;
use crate::player::{Chips, Player};

/// A betting round of Texas Hold'em.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Waiting,
    Betting,
    Showdown,
}

/// Per-hand table state.
///
/// Only [`crate::engine::BettingEngine`] mutates it; everyone else reads a
/// borrowed or cloned snapshot. `pot` holds chips from completed streets,
/// so the total in play is `pot + Σ player.current_bet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub hand_number: u64,
    pub street: Street,
    pub phase: Phase,
    pub pot: Chips,
    pub community_cards: Vec<Card>,
    /// Fixed seat order.
    pub players: Vec<Player>,
    pub acting_index: usize,
    pub dealer_index: usize,
    pub small_blind_index: usize,
    pub big_blind_index: usize,
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Highest commitment on the current street.
    pub current_bet: Chips,
    pub min_raise: Chips,
    pub action_history: Vec<ActionRecord>,
}

impl GameState {
    pub(crate) fn new(players: Vec<Player>, small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            hand_number: 0,
            street: Street::Preflop,
            phase: Phase::Waiting,
            pot: 0.0,
            community_cards: Vec::with_capacity(5),
            players,
            acting_index: 0,
            dealer_index: 0,
            small_blind_index: 0,
            big_blind_index: 0,
            small_blind,
            big_blind,
            current_bet: 0.0,
            min_raise: big_blind,
            action_history: Vec::new(),
        }
    }

    /// The hand ended, either by reaching showdown or by everyone else folding.
    pub fn is_hand_over(&self) -> bool {
        self.phase == Phase::Showdown
    }

    pub fn acting_player(&self) -> Option<&Player> {
        (self.phase == Phase::Betting)
            .then(|| self.players.get(self.acting_index))
            .flatten()
    }

    /// Everything wagered this hand that has not been awarded yet.
    pub fn total_pot(&self) -> Chips {
        self.pot + self.players.iter().map(|p| p.current_bet).sum::<Chips>()
    }

    pub fn players_in_hand(&self) -> usize {
        self.players.iter().filter(|p| !p.is_folded).count()
    }

    /// Players who received hole cards this hand (sitting-out seats excluded).
    pub fn players_dealt_in(&self) -> usize {
        self.players.iter().filter(|p| !p.hole_cards.is_empty()).count()
    }

    /// Dealt-in seats clockwise from the dealer up to `index`, `0` being the
    /// dealer itself. Seats sitting the hand out are not counted.
    pub fn seats_after_dealer(&self, index: usize) -> usize {
        let n = self.players.len();
        let dealer = self.dealer_index % n;
        let raw = (index + n - dealer) % n;
        (1..=raw)
            .filter(|k| !self.players[(dealer + k) % n].hole_cards.is_empty())
            .count()
    }
}
