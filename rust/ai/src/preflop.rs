//! Static pre-flop hand scores and the seat position model.

use holdem_engine::cards::Card;

/// Scores two hole cards on a 0-100 scale.
///
/// Pocket pairs rank by pair value; ace- to jack-high hands by kicker and
/// suitedness; everything else blends high card, suitedness and gap size.
///
/// ```
/// use holdem_ai::preflop::preflop_score;
/// use holdem_engine::cards::parse_cards;
///
/// let aces = parse_cards("Ah As").unwrap();
/// assert_eq!(preflop_score([aces[0], aces[1]]), 100.0);
/// ```
pub fn preflop_score(hole: [Card; 2]) -> f64 {
    let (a, b) = (hole[0].rank.value(), hole[1].rank.value());
    let (high, low) = if a >= b { (a, b) } else { (b, a) };
    let suited = hole[0].suit == hole[1].suit;
    let kicker = f64::from(low - 2);

    let score = if high == low {
        52.0 + f64::from(high - 2) * 4.0
    } else {
        match high {
            14 => 45.0 + kicker * 40.0 / 11.0 + if suited { 6.0 } else { 0.0 },
            13 => 35.0 + kicker * 4.0 + if suited { 6.0 } else { 0.0 },
            12 => 30.0 + kicker * 35.0 / 9.0 + if suited { 5.0 } else { 0.0 },
            11 => 25.0 + kicker * 30.0 / 8.0 + if suited { 5.0 } else { 0.0 },
            _ => {
                let gap_bonus = match high - low - 1 {
                    0 => 12.0,
                    1 => 8.0,
                    2 => 4.0,
                    _ => 0.0,
                };
                f64::from(high) * 2.5 + if suited { 10.0 } else { 0.0 } + gap_bonus
            }
        }
    };
    score.clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Early,
    Middle,
    Late,
    Button,
}

impl Position {
    /// Position of a seat `distance` places after the dealer at a table of
    /// `players` seats. Four-handed the blinds are early and the seat
    /// before the button is late.
    pub fn from_distance(distance: usize, players: usize) -> Self {
        match distance {
            0 => Position::Button,
            d if players > 2 && d == players - 1 => Position::Late,
            d if d <= 2 => Position::Early,
            _ => Position::Middle,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Position::Early => 0.8,
            Position::Middle => 0.9,
            Position::Late => 1.1,
            Position::Button => 1.2,
        }
    }
}
