//! Command handlers, one module per subcommand.
//!
//! Every handler has the shape
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`, writes only
//! to the streams it is given and leaves error reporting to [`crate::run`].

pub mod cfg;
pub mod deal;
pub mod equity;
pub mod eval;
pub mod odds;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use equity::handle_equity_command;
pub use eval::handle_eval_command;
pub use odds::handle_odds_command;
pub use sim::handle_sim_command;
