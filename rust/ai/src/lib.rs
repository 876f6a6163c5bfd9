//! # holdem-ai: Style-Driven Hold'em Opponents
//!
//! Turns a playing-style profile and a read-only table snapshot into one
//! legal [`BetAction`]. The betting engine stays the only writer of game
//! state; opponents only ever see `&GameState`.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait every opponent implements
//! - [`style`] - [`style::PlayerStyleConfig`] and the built-in presets
//! - [`preflop`] - Static hole-card scores and the position model
//! - [`decision`] - The pure `decide` function
//! - [`styled`] - [`styled::StyledAI`], a seat bound to one style
//! - [`create_ai`] - Factory by style id
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::{create_ai, AIOpponent};
//! use holdem_engine::engine::{BettingEngine, TableConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let ai = create_ai("tag").unwrap();
//! let config = TableConfig { seed: Some(3), ..TableConfig::default() };
//! let mut engine = BettingEngine::with_stacks(&[100.0; 4], config).unwrap();
//! engine.start_hand().unwrap();
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(9);
//! let seat = engine.state().acting_index;
//! let action = ai.get_action(engine.state(), seat, &mut rng);
//! engine.apply_action(action).unwrap();
//! ```

use holdem_engine::game::GameState;
use holdem_engine::player::BetAction;
use rand::RngCore;

pub mod decision;
pub mod preflop;
pub mod style;
pub mod styled;

pub use style::{PlayerStyleConfig, StyleError};

/// Interface for AI opponents.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::AIOpponent;
/// use holdem_engine::game::GameState;
/// use holdem_engine::player::BetAction;
/// use rand::RngCore;
///
/// struct AlwaysCall;
///
/// impl AIOpponent for AlwaysCall {
///     fn get_action(&self, _state: &GameState, _seat: usize, _rng: &mut dyn RngCore) -> BetAction {
///         // the engine turns a free call into a check
///         BetAction::Call
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCall"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Chooses an action for the player at `seat`. Must not be called for
    /// a seat that cannot act.
    fn get_action(&self, state: &GameState, seat: usize, rng: &mut dyn RngCore) -> BetAction;

    fn name(&self) -> &str;
}

/// Builds an opponent for a preset style id (`tag`, `lag`, `rock`,
/// `station`, `maniac`).
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// let ai = create_ai("station").unwrap();
/// assert_eq!(ai.name(), "Calling Station");
/// assert!(create_ai("baseline").is_err());
/// ```
pub fn create_ai(style_id: &str) -> Result<Box<dyn AIOpponent>, StyleError> {
    let style = PlayerStyleConfig::preset(style_id)?;
    Ok(Box::new(styled::StyledAI::new(style)))
}
