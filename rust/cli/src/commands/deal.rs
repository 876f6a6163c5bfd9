//! Deal command handler: one seeded deal, every seat's hole cards shown.

use crate::error::CliError;
use crate::ui::{format_cards, format_chips};
use holdem_engine::engine::{BettingEngine, MAX_PLAYERS, TableConfig};
use std::io::Write;

const DEAL_STACK: f64 = 100.0;

/// Handle the deal command.
///
/// Starts one hand on a fresh table of `players` seats and prints the
/// button, the blinds and each seat's hole cards.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if !(2..=MAX_PLAYERS).contains(&players) {
        return Err(CliError::InvalidInput(format!(
            "players must be between 2 and {}, got {}",
            MAX_PLAYERS, players
        )));
    }
    let base_seed = seed.unwrap_or_else(rand::random);
    let config = TableConfig {
        seed: Some(base_seed),
        ..TableConfig::default()
    };
    let mut eng = BettingEngine::with_stacks(&vec![DEAL_STACK; players], config)?;
    let state = eng.start_hand()?;

    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(
        out,
        "Dealer: {}  SB: {} ({})  BB: {} ({})",
        state.players[state.dealer_index].seat,
        state.players[state.small_blind_index].seat,
        format_chips(state.small_blind),
        state.players[state.big_blind_index].seat,
        format_chips(state.big_blind),
    )?;
    for p in &state.players {
        writeln!(out, "Hole {}: {}", p.seat, format_cards(&p.hole_cards))?;
    }
    if let Some(p) = state.acting_player() {
        writeln!(out, "First to act: {}", p.seat)?;
    }
    Ok(())
}
