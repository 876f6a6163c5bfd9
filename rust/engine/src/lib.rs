//! # holdem-engine: No-Limit Hold'em Rules Core
//!
//! Chip accounting, betting legality and street progression for a 2-4 seat
//! No-Limit Texas Hold'em table, together with the hand evaluator and the
//! odds calculator the decision layer builds on.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and text parsing
//! - [`deck`] - Seeded 52-card deck, shuffled fresh every hand
//! - [`engine`] - [`engine::BettingEngine`], the only writer of game state
//! - [`game`] - Per-hand state snapshot, streets and phases
//! - [`hand`] - Best-five-card evaluation and comparison
//! - [`odds`] - Pot odds, Monte-Carlo equity, outs, hit probabilities
//! - [`player`] - Seats, stacks and betting actions
//! - [`rules`] - Legality pre-checks and action validation
//! - [`logger`] - Action records, hand histories and the JSONL logger
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate, HandRanking};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let eval = evaluate(&cards).unwrap();
//! assert_eq!(eval.ranking, HandRanking::RoyalFlush);
//! ```
//!
//! ## Playing a Hand
//!
//! ```rust
//! use holdem_engine::engine::{BettingEngine, TableConfig};
//! use holdem_engine::player::BetAction;
//!
//! let config = TableConfig { seed: Some(42), ..TableConfig::default() };
//! let mut engine = BettingEngine::with_stacks(&[100.0, 100.0], config).unwrap();
//! engine.start_hand().unwrap();
//!
//! // Heads-up the button posts the small blind and acts first pre-flop
//! engine.apply_action(BetAction::Fold).unwrap();
//! assert!(engine.state().is_hand_over());
//!
//! let result = engine.settle_showdown().unwrap();
//! assert!(result.uncontested);
//! assert_eq!(result.total_pot, 1.5);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod odds;
pub mod player;
pub mod rules;
