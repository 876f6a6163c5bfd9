use crate::errors::GameError;
use crate::game::GameState;
use crate::player::{BetAction as A, Chips, Player};

/// An action after legality checks, with its chip amounts resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips to move from the stack.
    Call(Chips),
    /// New total street commitment.
    Raise(Chips),
    /// New total street commitment once the whole stack is in.
    AllIn(Chips),
}

/// True when the player has already matched the highest commitment.
pub fn can_check(player: &Player, current_bet: Chips) -> bool {
    player.current_bet >= current_bet
}

/// Chips the player needs to put in to call, capped at their stack.
pub fn call_amount(player: &Player, current_bet: Chips) -> Chips {
    (current_bet - player.current_bet).max(0.0).min(player.stack)
}

/// Smallest legal total commitment for a raise that is not all-in.
pub fn min_raise_amount(state: &GameState) -> Chips {
    state.min_raise
}

/// Validates a player action against the current betting level.
///
/// Short raises and calls that need the whole stack become all-ins; a call
/// with nothing to call is treated as a check.
///
/// # Errors
///
/// - [`GameError::CannotCheck`] - checking while facing a bet
/// - [`GameError::RaiseTooSmall`] - raising below `min_raise` without going all-in
///
/// # Examples
///
/// ```
/// use holdem_engine::player::{BetAction, Player, SeatId};
/// use holdem_engine::rules::{validate_action, ValidatedAction};
///
/// let p = Player::new(SeatId::Hero, 100.0);
/// assert_eq!(
///     validate_action(&p, 2.0, 4.0, BetAction::Call).unwrap(),
///     ValidatedAction::Call(2.0)
/// );
/// assert_eq!(
///     validate_action(&p, 2.0, 4.0, BetAction::Raise(500.0)).unwrap(),
///     ValidatedAction::AllIn(100.0)
/// );
/// assert!(validate_action(&p, 2.0, 4.0, BetAction::Check).is_err());
/// ```
pub fn validate_action(
    player: &Player,
    current_bet: Chips,
    min_raise: Chips,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let max_total = player.max_commitment();
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if can_check(player, current_bet) {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::CannotCheck {
                    to_call: call_amount(player, current_bet),
                })
            }
        }
        A::Call => {
            let to_call = current_bet - player.current_bet;
            if to_call <= 0.0 {
                Ok(ValidatedAction::Check)
            } else if to_call >= player.stack {
                Ok(ValidatedAction::AllIn(max_total))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Raise(total) => {
            if total >= max_total {
                Ok(ValidatedAction::AllIn(max_total))
            } else if total < min_raise {
                Err(GameError::RaiseTooSmall {
                    amount: total,
                    minimum: min_raise,
                })
            } else {
                Ok(ValidatedAction::Raise(total))
            }
        }
        A::AllIn => Ok(ValidatedAction::AllIn(max_total)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::SeatId;

    fn player(stack: Chips, bet: Chips) -> Player {
        let mut p = Player::new(SeatId::Opponent1, stack);
        p.current_bet = bet;
        p
    }

    #[test]
    fn check_only_when_matched() {
        assert!(can_check(&player(10.0, 1.0), 1.0));
        assert!(!can_check(&player(10.0, 0.5), 1.0));
        let err = validate_action(&player(10.0, 0.5), 1.0, 2.0, A::Check).unwrap_err();
        assert_eq!(err, GameError::CannotCheck { to_call: 0.5 });
    }

    #[test]
    fn call_amount_is_capped_by_stack() {
        assert_eq!(call_amount(&player(100.0, 0.5), 1.0), 0.5);
        assert_eq!(call_amount(&player(3.0, 0.0), 10.0), 3.0);
        assert_eq!(call_amount(&player(3.0, 10.0), 10.0), 0.0);
    }

    #[test]
    fn call_without_bet_is_check() {
        assert_eq!(
            validate_action(&player(10.0, 1.0), 1.0, 2.0, A::Call).unwrap(),
            ValidatedAction::Check
        );
    }

    #[test]
    fn short_call_becomes_all_in() {
        assert_eq!(
            validate_action(&player(4.0, 1.0), 10.0, 19.0, A::Call).unwrap(),
            ValidatedAction::AllIn(5.0)
        );
    }

    #[test]
    fn raise_below_minimum_is_rejected() {
        let err = validate_action(&player(100.0, 0.0), 1.0, 2.0, A::Raise(1.5)).unwrap_err();
        assert_eq!(
            err,
            GameError::RaiseTooSmall {
                amount: 1.5,
                minimum: 2.0
            }
        );
    }

    #[test]
    fn short_raise_for_whole_stack_is_all_in() {
        assert_eq!(
            validate_action(&player(1.5, 0.0), 1.0, 2.0, A::Raise(1.5)).unwrap(),
            ValidatedAction::AllIn(1.5)
        );
    }
}
