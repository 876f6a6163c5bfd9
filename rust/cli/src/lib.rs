//! # holdem-cli
//!
//! Command-line driver for the `holdem-engine` and `holdem-ai` crates.
//!
//! The primary entry point is [`run`], which parses arguments and executes
//! one subcommand, writing to the streams it is given.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = holdem_cli::run(["holdem", "eval", "Ah Kh Qh Jh Th"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: AI-vs-AI hands with optional JSONL hand histories
//! - `deal`: Deal a single hand for inspection
//! - `equity`: Monte-Carlo equity, outs and hit probabilities
//! - `eval`: Best five-card hand and its description
//! - `odds`: Pot odds and expected value of a call
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod logging;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_equity_command, handle_eval_command,
    handle_odds_command, handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["sim", "deal", "equity", "eval", "odds", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns the process exit code: [`exit_code::SUCCESS`] or
/// [`exit_code::ERROR`]. Help and version output go to `out` and count as
/// success.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e.to_string());
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Sim {
            hands,
            output,
            seed,
            hero_style,
        } => handle_sim_command(hands, output, seed, &hero_style, out, err),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Equity {
            hero,
            board,
            opponents,
            iterations,
            seed,
        } => handle_equity_command(&hero, &board, opponents, iterations, seed, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Odds { pot, call, equity } => handle_odds_command(pot, call, equity, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_message: &str) -> std::io::Result<()> {
    writeln!(err, "{}", clap_message)?;
    writeln!(err)?;
    writeln!(err, "Hold'em CLI")?;
    writeln!(err, "Usage: holdem <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: holdem --help")
}
