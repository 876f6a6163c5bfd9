//! Pot odds, Monte-Carlo equity and out counting.
//!
//! All percentages are on a 0-100 scale and rounded to one decimal.

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{all_ranks, all_suits, full_deck, Card};
use crate::errors::{DeckError, OddsError};
use crate::hand::{compare_hands, evaluate};
use crate::player::Chips;

pub const DEFAULT_EQUITY_ITERATIONS: usize = 1000;

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Share of the final pot a call represents.
///
/// ```
/// use holdem_engine::odds::pot_odds;
/// assert_eq!(pot_odds(100.0, 0.0), 100.0);
/// assert_eq!(pot_odds(100.0, 50.0), 33.3);
/// ```
pub fn pot_odds(pot: Chips, call_amount: Chips) -> f64 {
    if call_amount <= 0.0 {
        return 100.0;
    }
    round1(call_amount / (pot + call_amount) * 100.0)
}

pub fn expected_value(pot: Chips, call_amount: Chips, equity_percent: f64) -> f64 {
    equity_percent / 100.0 * (pot + call_amount) - call_amount
}

/// Chance of hitting one of `outs` with `cards_to_come` cards left.
///
/// One card uses the rule of 2; two cards use the exact formula.
pub fn hit_probability(outs: u32, cards_to_come: u8) -> f64 {
    let outs = f64::from(outs.min(47));
    if cards_to_come <= 1 {
        (outs * 2.0).min(100.0)
    } else {
        let miss = (47.0 - outs) / 47.0 * ((46.0 - outs).max(0.0) / 46.0);
        round1((1.0 - miss) * 100.0)
    }
}

fn check_known_cards(hero: &[Card], community: &[Card]) -> Result<(), OddsError> {
    if hero.len() != 2 {
        return Err(OddsError::InvalidHoleCards { got: hero.len() });
    }
    if community.len() > 5 {
        return Err(OddsError::TooManyCommunityCards {
            got: community.len(),
        });
    }
    let mut seen = HashSet::with_capacity(7);
    for &card in hero.iter().chain(community) {
        if !seen.insert(card) {
            return Err(OddsError::DuplicateCard(card));
        }
    }
    Ok(())
}

fn unseen_cards(known: &[Card]) -> Vec<Card> {
    full_deck()
        .into_iter()
        .filter(|c| !known.contains(c))
        .collect()
}

/// Estimates the hero's equity against `num_opponents` random hands.
///
/// Each iteration completes the board and deals two cards per opponent from
/// the shuffled unseen cards. A win scores 1, any tie for best scores 0.5.
/// The result is a sample, so callers should pass a seeded `rng` when they
/// need repeatable numbers.
///
/// # Errors
///
/// Malformed hero/community input, or more opponents than the unseen cards
/// can supply.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::odds::equity;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let hero = parse_cards("Ah As").unwrap();
/// let mut rng = ChaCha20Rng::seed_from_u64(1);
/// let eq = equity(&hero, &[], 1, 2000, &mut rng).unwrap();
/// assert!(eq > 75.0 && eq < 92.0);
/// ```
pub fn equity<R: Rng + ?Sized>(
    hero: &[Card],
    community: &[Card],
    num_opponents: usize,
    iterations: usize,
    rng: &mut R,
) -> Result<f64, OddsError> {
    check_known_cards(hero, community)?;
    if iterations == 0 {
        return Ok(0.0);
    }

    let known: Vec<Card> = hero.iter().chain(community).copied().collect();
    let mut deck = unseen_cards(&known);
    let missing = 5 - community.len();
    let needed = missing + 2 * num_opponents;
    if needed > deck.len() {
        return Err(DeckError::DeckExhausted {
            requested: needed,
            remaining: deck.len(),
        }
        .into());
    }

    let mut score = 0.0;
    let mut board = Vec::with_capacity(5);
    let mut cards = Vec::with_capacity(7);
    for _ in 0..iterations {
        deck.shuffle(rng);
        let mut drawn = deck.iter().copied();

        board.clear();
        board.extend_from_slice(community);
        board.extend(drawn.by_ref().take(missing));

        cards.clear();
        cards.extend_from_slice(hero);
        cards.extend_from_slice(&board);
        let hero_eval = evaluate(&cards)?;

        let mut beaten = false;
        let mut tied = false;
        for _ in 0..num_opponents {
            cards.clear();
            cards.extend(drawn.by_ref().take(2));
            cards.extend_from_slice(&board);
            match compare_hands(&evaluate(&cards)?, &hero_eval) {
                Ordering::Greater => {
                    beaten = true;
                    break;
                }
                Ordering::Equal => tied = true,
                Ordering::Less => {}
            }
        }

        if !beaten {
            score += if tied { 0.5 } else { 1.0 };
        }
    }

    Ok(round1(score / iterations as f64 * 100.0))
}

/// Counts unseen cards that would improve the hero's hand ranking on the
/// next card.
///
/// Only meaningful before the river; a full board yields 0. With fewer than
/// three community cards both the current and the improved hand are padded
/// to five cards with neutral filler.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::odds::outs;
///
/// // three aces and three kings pair a hole card
/// let hero = parse_cards("Ah Kh").unwrap();
/// assert_eq!(outs(&hero, &[]).unwrap(), 6);
/// ```
pub fn outs(hero: &[Card], community: &[Card]) -> Result<u32, OddsError> {
    check_known_cards(hero, community)?;
    if community.len() >= 5 {
        return Ok(0);
    }

    let known: Vec<Card> = hero.iter().chain(community).copied().collect();
    let mut cards = known.clone();
    pad_with_filler(&mut cards);
    let current = evaluate(&cards)?.ranking;

    let mut count = 0;
    for card in unseen_cards(&known) {
        cards.clear();
        cards.extend_from_slice(&known);
        cards.push(card);
        pad_with_filler(&mut cards);
        if evaluate(&cards)?.ranking > current {
            count += 1;
        }
    }
    Ok(count)
}

/// Tops `cards` up to five with the lowest cards that cannot change the
/// ranking: a rank not already held, no completed straight, and a suit
/// different from the first card so no flush can form.
fn pad_with_filler(cards: &mut Vec<Card>) {
    let Some(anchor) = cards.first().map(|c| c.suit) else {
        return;
    };
    for rank in all_ranks() {
        if cards.len() >= 5 {
            break;
        }
        if cards.iter().any(|c| c.rank == rank) {
            continue;
        }
        let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
        values.push(rank.value());
        if completes_straight(&mut values) {
            continue;
        }
        if let Some(suit) = all_suits().into_iter().find(|&s| s != anchor) {
            cards.push(Card::new(rank, suit));
        }
    }
}

fn completes_straight(values: &mut Vec<u8>) -> bool {
    if values.contains(&14) {
        values.push(1);
    }
    values.sort_unstable();
    values.dedup();
    values.windows(5).any(|w| w[4] - w[0] == 4)
}
