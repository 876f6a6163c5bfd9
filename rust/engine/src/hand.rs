//! Best-five-card evaluation for 5 to 7 cards.
//!
//! Rankings are checked top-down (royal flush first, high card last) and
//! the first category that matches wins. Inside a category the highest
//! qualifying combination is always chosen, with kickers filled in by
//! descending rank until exactly five cards are selected.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{all_suits, Card, Rank};
use crate::errors::EvalError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandRanking {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRanking::HighCard => "High Card",
            HandRanking::Pair => "Pair",
            HandRanking::TwoPair => "Two Pair",
            HandRanking::ThreeOfAKind => "Three of a Kind",
            HandRanking::Straight => "Straight",
            HandRanking::Flush => "Flush",
            HandRanking::FullHouse => "Full House",
            HandRanking::FourOfAKind => "Four of a Kind",
            HandRanking::StraightFlush => "Straight Flush",
            HandRanking::RoyalFlush => "Royal Flush",
        };
        f.write_str(name)
    }
}

/// Result of evaluating a set of cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandEvaluation {
    pub ranking: HandRanking,
    /// The five cards that make the hand, most significant first.
    /// A wheel is ordered `5 4 3 2 A`.
    pub best_five: [Card; 5],
    pub description: String,
}

impl HandEvaluation {
    fn new(ranking: HandRanking, best_five: [Card; 5]) -> Self {
        let description = describe(ranking, &best_five);
        Self {
            ranking,
            best_five,
            description,
        }
    }
}

/// Evaluates the best five-card hand available in `cards`.
///
/// # Errors
///
/// Returns [`EvalError::InsufficientCards`] when fewer than five cards are given.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate, HandRanking};
///
/// let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(hand.ranking, HandRanking::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandEvaluation, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::InsufficientCards { got: cards.len() });
    }

    // Total order so that input permutation never changes the selected cards
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.rank.cmp(&a.rank).then(b.suit.cmp(&a.suit)));
    let groups = rank_groups(&sorted);

    if let Some(run) = best_straight_flush(&sorted) {
        let ranking = if run[0].rank == Rank::Ace {
            HandRanking::RoyalFlush
        } else {
            HandRanking::StraightFlush
        };
        return Ok(HandEvaluation::new(ranking, run));
    }

    if let Some(quad) = groups.iter().find(|g| g.len() >= 4) {
        let mut v = quad[..4].to_vec();
        v.extend(kickers(&sorted, &[quad[0].rank], 1));
        return Ok(HandEvaluation::new(HandRanking::FourOfAKind, five(&v)));
    }

    if let Some(trip) = groups.iter().find(|g| g.len() >= 3) {
        // A second set of trips can serve as the pair
        if let Some(pair) = groups
            .iter()
            .find(|g| g[0].rank != trip[0].rank && g.len() >= 2)
        {
            let mut v = trip[..3].to_vec();
            v.extend_from_slice(&pair[..2]);
            return Ok(HandEvaluation::new(HandRanking::FullHouse, five(&v)));
        }
    }

    if let Some(flush) = best_flush(&sorted) {
        return Ok(HandEvaluation::new(HandRanking::Flush, flush));
    }

    if let Some(run) = best_straight(&sorted) {
        return Ok(HandEvaluation::new(HandRanking::Straight, run));
    }

    if let Some(trip) = groups.iter().find(|g| g.len() == 3) {
        let mut v = trip.clone();
        v.extend(kickers(&sorted, &[trip[0].rank], 2));
        return Ok(HandEvaluation::new(HandRanking::ThreeOfAKind, five(&v)));
    }

    let pairs: Vec<&Vec<Card>> = groups.iter().filter(|g| g.len() == 2).collect();
    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        let mut v = high.clone();
        v.extend_from_slice(low);
        v.extend(kickers(&sorted, &[high[0].rank, low[0].rank], 1));
        return Ok(HandEvaluation::new(HandRanking::TwoPair, five(&v)));
    }
    if let Some(pair) = pairs.first() {
        let mut v = pair.to_vec();
        v.extend(kickers(&sorted, &[pair[0].rank], 3));
        return Ok(HandEvaluation::new(HandRanking::Pair, five(&v)));
    }

    Ok(HandEvaluation::new(HandRanking::HighCard, five(&sorted)))
}

/// Orders two evaluations: ranking first, then the five selected cards
/// position by position. `Equal` means a split pot.
pub fn compare_hands(a: &HandEvaluation, b: &HandEvaluation) -> Ordering {
    match a.ranking.cmp(&b.ranking) {
        Ordering::Equal => {
            let ra = a.best_five.iter().map(|c| c.rank);
            let rb = b.best_five.iter().map(|c| c.rank);
            ra.cmp(rb)
        }
        ord => ord,
    }
}

fn five(v: &[Card]) -> [Card; 5] {
    [v[0], v[1], v[2], v[3], v[4]]
}

/// Cards grouped by rank, highest rank first. Expects rank-descending input.
fn rank_groups(sorted: &[Card]) -> Vec<Vec<Card>> {
    let mut groups: Vec<Vec<Card>> = Vec::new();
    for &c in sorted {
        match groups.last_mut() {
            Some(g) if g[0].rank == c.rank => g.push(c),
            _ => groups.push(vec![c]),
        }
    }
    groups
}

fn kickers(sorted: &[Card], exclude: &[Rank], n: usize) -> Vec<Card> {
    sorted
        .iter()
        .filter(|c| !exclude.contains(&c.rank))
        .take(n)
        .copied()
        .collect()
}

/// Highest five-card run in rank-descending `cards`, wheel included.
fn best_straight(cards: &[Card]) -> Option<[Card; 5]> {
    let mut by_rank: [Option<Card>; 15] = [None; 15];
    for &c in cards {
        let slot = &mut by_rank[c.rank.value() as usize];
        if slot.is_none() {
            *slot = Some(c);
        }
    }

    for high in (6..=14usize).rev() {
        if let (Some(a), Some(b), Some(c), Some(d), Some(e)) = (
            by_rank[high],
            by_rank[high - 1],
            by_rank[high - 2],
            by_rank[high - 3],
            by_rank[high - 4],
        ) {
            return Some([a, b, c, d, e]);
        }
    }

    // Wheel: the ace plays low and the hand is five-high
    if let (Some(r5), Some(r4), Some(r3), Some(r2), Some(ace)) = (
        by_rank[5],
        by_rank[4],
        by_rank[3],
        by_rank[2],
        by_rank[14],
    ) {
        return Some([r5, r4, r3, r2, ace]);
    }
    None
}

fn suited(sorted: &[Card]) -> impl Iterator<Item = Vec<Card>> + '_ {
    all_suits().into_iter().filter_map(move |suit| {
        let cards: Vec<Card> = sorted.iter().filter(|c| c.suit == suit).copied().collect();
        (cards.len() >= 5).then_some(cards)
    })
}

fn best_straight_flush(sorted: &[Card]) -> Option<[Card; 5]> {
    suited(sorted)
        .filter_map(|cards| best_straight(&cards))
        .max_by_key(|run| run[0].rank)
}

fn best_flush(sorted: &[Card]) -> Option<[Card; 5]> {
    suited(sorted)
        .map(|cards| five(&cards))
        .max_by(|a, b| {
            let ra = a.iter().map(|c| c.rank);
            let rb = b.iter().map(|c| c.rank);
            ra.cmp(rb)
        })
}

fn describe(ranking: HandRanking, best: &[Card; 5]) -> String {
    let top = best[0].rank;
    match ranking {
        HandRanking::RoyalFlush => "Royal Flush".to_string(),
        HandRanking::StraightFlush => format!("Straight Flush, {} high", top.symbol()),
        HandRanking::FourOfAKind => format!("Four of a Kind, {}", top.plural()),
        HandRanking::FullHouse => {
            format!("Full House, {} over {}", top.plural(), best[3].rank.plural())
        }
        HandRanking::Flush => format!("Flush, {} high", top.symbol()),
        HandRanking::Straight => format!("Straight, {} high", top.symbol()),
        HandRanking::ThreeOfAKind => format!("Three of a Kind, {}", top.plural()),
        HandRanking::TwoPair => {
            format!("Two Pair, {} and {}", top.plural(), best[2].rank.plural())
        }
        HandRanking::Pair => format!("Pair of {}", top.plural()),
        HandRanking::HighCard => format!("High Card, {}", top.symbol()),
    }
}
