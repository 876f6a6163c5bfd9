//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "No-Limit Hold'em engine: simulate, deal and analyze hands"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play AI-vs-AI hands with stacks carried between hands
    Sim {
        #[arg(long, default_value_t = 10)]
        hands: u64,
        /// Append hand histories to this JSONL file
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        /// Style id driving the hero seat
        #[arg(long, default_value = "tag")]
        hero_style: String,
    },
    /// Deal one hand and show every seat's hole cards
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 4)]
        players: usize,
    },
    /// Monte-Carlo equity, outs and hit probabilities
    Equity {
        /// Two hole cards, e.g. "Ah Kh"
        #[arg(long)]
        hero: String,
        /// Zero to five community cards
        #[arg(long, default_value = "")]
        board: String,
        #[arg(long, default_value_t = 1)]
        opponents: usize,
        /// Defaults to the configured equity_iterations
        #[arg(long)]
        iterations: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Best five-card hand out of 5-7 cards
    Eval {
        /// Cards separated by spaces, e.g. "Ah Kh Qh Jh Th"
        cards: String,
    },
    /// Pot odds for a call, plus EV when an equity is given
    Odds {
        #[arg(long)]
        pot: f64,
        #[arg(long)]
        call: f64,
        /// Estimated equity in percent
        #[arg(long)]
        equity: Option<f64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
