//! Maps a style profile and a table snapshot to one legal action.
//!
//! Decisions only read their inputs. All randomness comes from the caller's
//! RNG, so a seeded RNG replays the same choices.

use rand::{Rng, RngCore};
use tracing::debug;

use holdem_engine::cards::{Card, Suit};
use holdem_engine::game::{GameState, Street};
use holdem_engine::hand::{evaluate, HandRanking};
use holdem_engine::odds::{equity, pot_odds};
use holdem_engine::player::{BetAction, Chips, Player};
use holdem_engine::rules::call_amount;

use crate::preflop::{preflop_score, Position};
use crate::style::PlayerStyleConfig;

/// Monte-Carlo iterations the AI spends on a marginal post-flop call.
pub const AI_EQUITY_ITERATIONS: usize = 300;

/// Fixed post-flop strength per made-hand category, 0-100.
pub fn made_hand_strength(ranking: HandRanking) -> f64 {
    match ranking {
        HandRanking::RoyalFlush => 100.0,
        HandRanking::StraightFlush => 95.0,
        HandRanking::FourOfAKind => 90.0,
        HandRanking::FullHouse => 85.0,
        HandRanking::Flush => 80.0,
        HandRanking::Straight => 75.0,
        HandRanking::ThreeOfAKind => 65.0,
        HandRanking::TwoPair => 55.0,
        HandRanking::Pair => 40.0,
        HandRanking::HighCard => 20.0,
    }
}

/// Three or more cards of one suit, or three distinct ranks inside a
/// five-rank window.
pub fn is_scary_board(board: &[Card]) -> bool {
    let flushy = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
        .iter()
        .any(|&s| board.iter().filter(|c| c.suit == s).count() >= 3);
    if flushy {
        return true;
    }
    let mut ranks: Vec<u8> = board.iter().map(|c| c.rank.value()).collect();
    if ranks.contains(&14) {
        ranks.push(1);
    }
    ranks.sort_unstable();
    ranks.dedup();
    ranks.windows(3).any(|w| w[2] - w[0] <= 4)
}

/// `random > (10 - aggression) / 10`: an aggression of 10 always succeeds.
fn aggression_roll(style: &PlayerStyleConfig, rng: &mut dyn RngCore) -> bool {
    rng.random::<f64>() > (10.0 - style.aggression) / 10.0
}

fn bluff_roll(style: &PlayerStyleConfig, board: &[Card], rng: &mut dyn RngCore) -> bool {
    let factor = if is_scary_board(board) { 1.5 } else { 1.0 };
    let chance = (style.bluff_frequency * factor).min(1.0);
    rng.random::<f64>() < chance
}

/// Pot multiplier band for a given strength, interpolated by aggression.
pub fn sizing_multiplier(strength: f64, aggression: f64) -> f64 {
    let (lo, hi) = if strength >= 85.0 {
        (0.75, 2.25)
    } else if strength >= 70.0 {
        (0.5, 1.5)
    } else {
        (0.33, 1.0)
    };
    lo + (hi - lo) * (aggression / 10.0).clamp(0.0, 1.0)
}

/// Raises to `target`, lifted to the minimum raise. Anything the stack
/// cannot cover becomes an all-in.
fn raise_to(player: &Player, state: &GameState, target: Chips) -> BetAction {
    let total = target.max(state.min_raise);
    if total >= player.max_commitment() {
        BetAction::AllIn
    } else {
        BetAction::Raise(total)
    }
}

fn sized_raise(
    player: &Player,
    style: &PlayerStyleConfig,
    state: &GameState,
    strength: f64,
) -> BetAction {
    let mult = sizing_multiplier(strength, style.aggression);
    raise_to(player, state, state.current_bet + state.total_pot() * mult)
}

/// Decides with the default equity budget.
pub fn decide(
    player: &Player,
    style: &PlayerStyleConfig,
    state: &GameState,
    rng: &mut dyn RngCore,
) -> BetAction {
    decide_with(player, style, state, AI_EQUITY_ITERATIONS, rng)
}

pub fn decide_with(
    player: &Player,
    style: &PlayerStyleConfig,
    state: &GameState,
    equity_iterations: usize,
    rng: &mut dyn RngCore,
) -> BetAction {
    let to_call = call_amount(player, state.current_bet);
    let passive = if to_call > 0.0 {
        BetAction::Fold
    } else {
        BetAction::Check
    };
    let [c1, c2] = player.hole_cards[..] else {
        return passive;
    };

    let (score, action) = if state.street == Street::Preflop {
        preflop(player, style, state, [c1, c2], to_call, rng)
    } else {
        postflop(player, style, state, to_call, equity_iterations, rng)
    };
    debug!(
        style = %style.style_id,
        seat = %player.seat,
        street = ?state.street,
        score,
        ?action,
        "ai decision"
    );
    action
}

fn preflop(
    player: &Player,
    style: &PlayerStyleConfig,
    state: &GameState,
    hole: [Card; 2],
    to_call: Chips,
    rng: &mut dyn RngCore,
) -> (f64, BetAction) {
    let seat = state
        .players
        .iter()
        .position(|p| p.seat == player.seat)
        .unwrap_or(state.dealer_index);
    let position =
        Position::from_distance(state.seats_after_dealer(seat), state.players_dealt_in());
    let score = preflop_score(hole) * position.multiplier();

    let plays = score >= (100.0 - style.vpip) * 0.95;
    let raises = score >= (100.0 - style.pfr) * 0.95;

    let action = if !plays {
        // a free look is never folded
        if to_call > 0.0 {
            BetAction::Fold
        } else {
            BetAction::Check
        }
    } else if to_call <= 0.0 {
        if raises && aggression_roll(style, rng) {
            sized_raise(player, style, state, score)
        } else {
            BetAction::Check
        }
    } else if raises && score >= 75.0 {
        sized_raise(player, style, state, score)
    } else if score >= 50.0
        || score >= 100.0 - style.vpip
        || score > pot_odds(state.total_pot(), to_call)
    {
        BetAction::Call
    } else {
        BetAction::Fold
    };
    (score, action)
}

fn postflop(
    player: &Player,
    style: &PlayerStyleConfig,
    state: &GameState,
    to_call: Chips,
    equity_iterations: usize,
    rng: &mut dyn RngCore,
) -> (f64, BetAction) {
    let board = &state.community_cards;
    let mut cards = player.hole_cards.clone();
    cards.extend_from_slice(board);
    let strength = match evaluate(&cards) {
        Ok(eval) => made_hand_strength(eval.ranking),
        Err(_) => made_hand_strength(HandRanking::HighCard),
    };
    let pot = state.total_pot();

    let action = if to_call <= 0.0 {
        if strength >= 60.0 && aggression_roll(style, rng) {
            sized_raise(player, style, state, strength)
        } else if bluff_roll(style, board, rng) && style.aggression >= 6.0 {
            raise_to(player, state, state.current_bet + pot * 0.5)
        } else {
            BetAction::Check
        }
    } else if strength >= 75.0 {
        if aggression_roll(style, rng) {
            sized_raise(player, style, state, strength)
        } else {
            BetAction::Call
        }
    } else if strength >= 50.0 {
        if rng.random::<f64>() < 0.3 {
            sized_raise(player, style, state, strength)
        } else {
            BetAction::Call
        }
    } else {
        let opponents = state.players_in_hand().saturating_sub(1).max(1);
        let estimate = match equity(&player.hole_cards, board, opponents, equity_iterations, rng) {
            Ok(eq) => eq,
            Err(e) => {
                // a malformed snapshot gets no equity credit
                debug!(seat = %player.seat, error = %e, "equity estimate failed");
                0.0
            }
        };
        if estimate > pot_odds(pot, to_call) || bluff_roll(style, board, rng) {
            BetAction::Call
        } else {
            BetAction::Fold
        }
    };
    (strength, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;

    #[test]
    fn scary_boards() {
        assert!(is_scary_board(&parse_cards("2h 7h Kh").unwrap()));
        assert!(is_scary_board(&parse_cards("5c 7d 9s").unwrap()));
        assert!(is_scary_board(&parse_cards("Ac 2d 4s").unwrap()));
        assert!(!is_scary_board(&parse_cards("2c 8d Ks").unwrap()));
        assert!(!is_scary_board(&parse_cards("2c 2d 3s").unwrap()));
    }

    #[test]
    fn sizing_bands_follow_strength_and_aggression() {
        assert_eq!(sizing_multiplier(90.0, 0.0), 0.75);
        assert_eq!(sizing_multiplier(90.0, 10.0), 2.25);
        assert_eq!(sizing_multiplier(75.0, 5.0), 1.0);
        assert!((sizing_multiplier(40.0, 10.0) - 1.0).abs() < 1e-12);
        assert_eq!(sizing_multiplier(40.0, 0.0), 0.33);
    }

    #[test]
    fn strength_table_is_monotonic() {
        let order = [
            HandRanking::HighCard,
            HandRanking::Pair,
            HandRanking::TwoPair,
            HandRanking::ThreeOfAKind,
            HandRanking::Straight,
            HandRanking::Flush,
            HandRanking::FullHouse,
            HandRanking::FourOfAKind,
            HandRanking::StraightFlush,
            HandRanking::RoyalFlush,
        ];
        for w in order.windows(2) {
            assert!(made_hand_strength(w[0]) < made_hand_strength(w[1]));
        }
    }
}
