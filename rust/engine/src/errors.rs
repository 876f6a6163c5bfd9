use thiserror::Error;

use crate::cards::Card;
use crate::player::Chips;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    #[error("Empty card text")]
    Empty,
    #[error("Invalid rank: {0:?}")]
    InvalidRank(String),
    #[error("Invalid suit: {0:?}")]
    InvalidSuit(char),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Deck exhausted: requested {requested} card(s), {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("At least 5 cards are required to evaluate a hand, got {got}")]
    InsufficientCards { got: usize },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error("A table needs at least 2 funded players")]
    NotEnoughPlayers,
    #[error("A table seats at most {max} players, got {got}")]
    TooManyPlayers { got: usize, max: usize },
    #[error("Invalid blinds: small {small}, big {big}")]
    InvalidBlinds { small: Chips, big: Chips },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Cannot check while facing a bet of {to_call}")]
    CannotCheck { to_call: Chips },
    #[error("Invalid raise amount: {amount}, minimum: {minimum}")]
    RaiseTooSmall { amount: Chips, minimum: Chips },
    #[error("Seat {seat} cannot act")]
    PlayerCannotAct { seat: usize },
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OddsError {
    #[error("Exactly 2 hole cards are required, got {got}")]
    InvalidHoleCards { got: usize },
    #[error("At most 5 community cards are allowed, got {got}")]
    TooManyCommunityCards { got: usize },
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
