//! Style-driven AI opponent.

use rand::RngCore;

use holdem_engine::game::GameState;
use holdem_engine::player::BetAction;

use crate::AIOpponent;
use crate::decision::{AI_EQUITY_ITERATIONS, decide_with};
use crate::style::PlayerStyleConfig;

/// An AI seat driven by one immutable [`PlayerStyleConfig`].
///
/// The driver owns one of these per opponent seat for the whole session.
///
/// # Example
///
/// ```rust
/// use holdem_ai::styled::StyledAI;
/// use holdem_ai::style::PlayerStyleConfig;
/// use holdem_ai::AIOpponent;
/// use holdem_engine::engine::{BettingEngine, TableConfig};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let ai = StyledAI::new(PlayerStyleConfig::preset("rock").unwrap());
/// assert_eq!(ai.name(), "Rock");
///
/// let config = TableConfig { seed: Some(42), ..TableConfig::default() };
/// let mut engine = BettingEngine::with_stacks(&[100.0, 100.0], config).unwrap();
/// engine.start_hand().unwrap();
///
/// let mut rng = ChaCha20Rng::seed_from_u64(1);
/// let seat = engine.state().acting_index;
/// let action = ai.get_action(engine.state(), seat, &mut rng);
/// engine.apply_action(action).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct StyledAI {
    style: PlayerStyleConfig,
    pub equity_iterations: usize,
}

impl StyledAI {
    pub fn new(style: PlayerStyleConfig) -> Self {
        Self {
            style,
            equity_iterations: AI_EQUITY_ITERATIONS,
        }
    }

    pub fn with_equity_iterations(mut self, iterations: usize) -> Self {
        self.equity_iterations = iterations;
        self
    }

    pub fn style(&self) -> &PlayerStyleConfig {
        &self.style
    }
}

impl AIOpponent for StyledAI {
    fn get_action(&self, state: &GameState, seat: usize, rng: &mut dyn RngCore) -> BetAction {
        match state.players.get(seat) {
            Some(player) => decide_with(player, &self.style, state, self.equity_iterations, rng),
            None => BetAction::Fold,
        }
    }

    fn name(&self) -> &str {
        &self.style.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_its_style() {
        let ai = StyledAI::new(PlayerStyleConfig::preset("maniac").unwrap()).with_equity_iterations(50);
        assert_eq!(ai.name(), "Maniac");
        assert_eq!(ai.style().style_id, "maniac");
        assert_eq!(ai.equity_iterations, 50);
    }
}
