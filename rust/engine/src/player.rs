use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Chip amounts. Fractional blinds such as 0.5 are carried exactly.
pub type Chips = f64;

/// Stable identity of a seat for the whole session.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatId {
    Hero,
    Opponent1,
    Opponent2,
    Opponent3,
}

impl SeatId {
    pub const ALL: [SeatId; 4] = [
        SeatId::Hero,
        SeatId::Opponent1,
        SeatId::Opponent2,
        SeatId::Opponent3,
    ];
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeatId::Hero => "hero",
            SeatId::Opponent1 => "opponent1",
            SeatId::Opponent2 => "opponent2",
            SeatId::Opponent3 => "opponent3",
        };
        f.write_str(name)
    }
}

/// An action submitted to the betting engine.
///
/// `Raise` carries the player's new *total* commitment for the street, not
/// the increment. Call and all-in amounts are derived by the engine.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "kebab-case")]
pub enum BetAction {
    Fold,
    Check,
    Call,
    Raise(Chips),
    AllIn,
}

/// A seat at the table. The stack carries over between hands; everything
/// else is reset by [`Player::reset_for_hand`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub seat: SeatId,
    pub stack: Chips,
    pub hole_cards: Vec<Card>,
    /// Chips committed on the current street.
    pub current_bet: Chips,
    pub is_folded: bool,
    pub is_all_in: bool,
    /// Whether the player has taken a voluntary action on this street.
    /// Posting a blind does not count.
    pub has_acted: bool,
}

impl Player {
    pub fn new(seat: SeatId, stack: Chips) -> Self {
        Self {
            seat,
            stack,
            hole_cards: Vec::with_capacity(2),
            current_bet: 0.0,
            is_folded: false,
            is_all_in: false,
            has_acted: false,
        }
    }

    pub fn reset_for_hand(&mut self) {
        self.hole_cards.clear();
        self.current_bet = 0.0;
        self.is_folded = false;
        self.is_all_in = false;
        self.has_acted = false;
    }

    /// Folded and all-in players no longer receive a turn.
    pub fn can_act(&self) -> bool {
        !self.is_folded && !self.is_all_in
    }

    /// Moves up to `amount` from the stack into the street bet and returns
    /// the chips actually moved. Marks the player all-in when the stack
    /// reaches exactly zero.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let moved = amount.max(0.0).min(self.stack);
        self.stack -= moved;
        self.current_bet += moved;
        if moved > 0.0 && self.stack == 0.0 {
            self.is_all_in = true;
        }
        moved
    }

    /// Highest street total this player can reach.
    pub fn max_commitment(&self) -> Chips {
        self.stack + self.current_bet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_caps_at_stack_and_marks_all_in() {
        let mut p = Player::new(SeatId::Hero, 3.0);
        assert_eq!(p.commit(1.5), 1.5);
        assert!(!p.is_all_in);
        assert_eq!(p.commit(10.0), 1.5);
        assert_eq!(p.stack, 0.0);
        assert_eq!(p.current_bet, 3.0);
        assert!(p.is_all_in);
        assert!(!p.can_act());
    }

    #[test]
    fn reset_keeps_stack() {
        let mut p = Player::new(SeatId::Opponent2, 50.0);
        p.commit(10.0);
        p.is_folded = true;
        p.reset_for_hand();
        assert_eq!(p.stack, 40.0);
        assert_eq!(p.current_bet, 0.0);
        assert!(p.can_act());
    }

    #[test]
    fn bet_action_serializes_with_tag() {
        let json = serde_json::to_string(&BetAction::Raise(3.5)).unwrap();
        assert_eq!(json, r#"{"type":"raise","amount":3.5}"#);
        let back: BetAction = serde_json::from_str(r#"{"type":"all-in"}"#).unwrap();
        assert_eq!(back, BetAction::AllIn);
    }
}
