//! Equity command handler: Monte-Carlo equity, outs and hit probabilities.

use crate::config;
use crate::error::CliError;
use crate::ui::format_cards;
use holdem_engine::cards::parse_cards;
use holdem_engine::engine::MAX_PLAYERS;
use holdem_engine::odds::{equity, hit_probability, outs};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;

/// Handle the equity command.
///
/// `iterations` falls back to the configured `equity_iterations`. Outs are
/// printed before the river, hit probabilities on the flop and turn only.
pub fn handle_equity_command(
    hero: &str,
    board: &str,
    opponents: usize,
    iterations: Option<usize>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hero = parse_cards(hero)?;
    let board = parse_cards(board)?;
    if !(1..MAX_PLAYERS).contains(&opponents) {
        return Err(CliError::InvalidInput(format!(
            "opponents must be between 1 and {}, got {}",
            MAX_PLAYERS - 1,
            opponents
        )));
    }
    let iterations = match iterations {
        Some(0) => return Err(CliError::InvalidInput("iterations must be >= 1".into())),
        Some(n) => n,
        None => config::load()?.equity_iterations,
    };
    let mut rng = ChaCha20Rng::seed_from_u64(seed.unwrap_or_else(rand::random));

    let eq = equity(&hero, &board, opponents, iterations, &mut rng)?;
    writeln!(out, "Hero: {}", format_cards(&hero))?;
    writeln!(out, "Board: {}", format_cards(&board))?;
    writeln!(
        out,
        "Equity: {:.1}% vs {} opponent(s) ({} iterations)",
        eq, opponents, iterations
    )?;

    if board.len() >= 5 {
        return Ok(());
    }
    let n = outs(&hero, &board)?;
    writeln!(out, "Outs: {}", n)?;
    // one-card and two-card odds only apply on the flop and turn
    if (3..5).contains(&board.len()) {
        writeln!(out, "Hit next card: {:.1}%", hit_probability(n, 1))?;
    }
    if board.len() == 3 {
        writeln!(out, "Hit by river: {:.1}%", hit_probability(n, 2))?;
    }
    Ok(())
}
