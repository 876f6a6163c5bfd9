use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::DeckError;

/// A 52-card deck dealt without replacement.
///
/// Dealt cards are never returned until [`Deck::shuffle`] rebuilds the deck,
/// which the betting engine does at the start of every hand.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Deck seeded from OS entropy.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// Rebuilds all 52 cards and shuffles them.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Result<Card, DeckError> {
        if self.position >= self.cards.len() {
            return Err(DeckError::DeckExhausted {
                requested: 1,
                remaining: 0,
            });
        }
        let c = self.cards[self.position];
        self.position += 1;
        Ok(c)
    }

    /// Deals `n` cards, or none at all if fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(DeckError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
