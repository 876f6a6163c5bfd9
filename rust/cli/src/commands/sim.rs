//! Simulation command handler.
//!
//! Seats the hero plus the configured opponents, each driven by a style
//! preset, and plays up to `hands` hands with stacks carried over. Stops
//! early once fewer than two players have chips.
//!
//! # Examples
//!
//! ```no_run
//! use holdem_cli::run;
//! use std::io;
//!
//! // 100 hands with seed 42, histories to data/sim.jsonl
//! run(
//!     ["holdem", "sim", "--hands", "100", "--seed", "42", "--output", "data/sim.jsonl"],
//!     &mut io::stdout(),
//!     &mut io::stderr(),
//! );
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui::{self, format_chips};
use holdem_ai::{AIOpponent, create_ai};
use holdem_engine::engine::{BettingEngine, TableConfig};
use holdem_engine::errors::GameError;
use holdem_engine::logger::{HandHistory, HandLogger};
use holdem_engine::player::BetAction;
use holdem_engine::rules::can_check;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use tracing::info;

/// Offsets the decision RNG stream from the deck stream.
const DECISION_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

/// Handle the sim command.
///
/// # Arguments
///
/// * `hands` - Maximum number of hands to play
/// * `output` - Path for JSONL hand histories
/// * `seed` - Overrides the configured seed
/// * `hero_style` - Style preset driving the hero seat
pub fn handle_sim_command(
    hands: u64,
    output: Option<String>,
    seed: Option<u64>,
    hero_style: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let cfg = config::load()?;

    let mut styles = vec![hero_style.to_ascii_lowercase()];
    styles.extend(cfg.opponents.iter().cloned());
    let seats: Vec<Box<dyn AIOpponent>> = styles
        .iter()
        .map(|id| create_ai(id))
        .collect::<Result<_, _>>()?;

    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let table = TableConfig {
        small_blind: cfg.small_blind,
        big_blind: cfg.big_blind,
        first_dealer: 0,
        seed: Some(base_seed),
    };
    let mut eng = BettingEngine::with_stacks(&vec![cfg.starting_stack; seats.len()], table)?;
    let mut rng = ChaCha20Rng::seed_from_u64(base_seed ^ DECISION_SEED_OFFSET);
    let mut logger = output.as_deref().map(HandLogger::create).transpose()?;

    info!(hands, seed = base_seed, players = seats.len(), "simulation started");
    let mut played = 0u64;
    let mut uncontested = 0u64;
    for _ in 0..hands {
        match eng.start_hand() {
            Ok(_) => {}
            Err(GameError::NotEnoughPlayers) => {
                writeln!(out, "Stopped early: only one player has chips left")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }

        while !eng.state().is_hand_over() {
            let idx = eng.state().acting_index;
            let action = seats[idx].get_action(eng.state(), idx, &mut rng);
            if let Err(e) = eng.apply_action(action).map(|_| ()) {
                let msg = format!(
                    "{} chose {:?} ({}); checking or folding instead",
                    seats[idx].name(),
                    action,
                    e
                );
                ui::display_warning(err, &msg)?;
                let player = &eng.state().players[idx];
                let fallback = if can_check(player, eng.state().current_bet) {
                    BetAction::Check
                } else {
                    BetAction::Fold
                };
                eng.apply_action(fallback)?;
            }
        }

        let result = eng.settle_showdown()?;
        played += 1;
        if result.uncontested {
            uncontested += 1;
        }
        if let Some(lg) = logger.as_mut() {
            let id = lg.next_id();
            lg.write(&HandHistory::from_state(id, eng.state(), Some(&result)))?;
        }
    }

    writeln!(out, "Simulated: {} hands (seed {})", played, base_seed)?;
    writeln!(out, "Won without showdown: {}", uncontested)?;
    writeln!(out, "Final stacks:")?;
    for (p, ai) in eng.state().players.iter().zip(&seats) {
        writeln!(out, "  {} ({}): {}", p.seat, ai.name(), format_chips(p.stack))?;
    }
    if let Some(path) = output {
        writeln!(out, "Hand histories: {}", path)?;
    }
    Ok(())
}
