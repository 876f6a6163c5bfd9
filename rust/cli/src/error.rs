//! Error types for the CLI application.
//!
//! Library errors from the engine and AI crates are folded into [`CliError`]
//! so command handlers can propagate everything with `?`.

use std::fmt;

use holdem_ai::StyleError;
use holdem_engine::errors::{CardParseError, EvalError, GameError, OddsError};

use crate::config::ConfigError;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<CardParseError> for CliError {
    fn from(error: CardParseError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<EvalError> for CliError {
    fn from(error: EvalError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<OddsError> for CliError {
    fn from(error: OddsError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<StyleError> for CliError {
    fn from(error: StyleError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_errors_map_to_categories() {
        let e: CliError = CardParseError::InvalidSuit('x').into();
        assert!(matches!(e, CliError::InvalidInput(_)));
        let e: CliError = GameError::NoHandInProgress.into();
        assert_eq!(e.to_string(), "Engine error: No hand in progress");
        let e: CliError = StyleError::UnknownStyle("fish".into()).into();
        assert_eq!(e.to_string(), "Configuration error: Unknown style: fish");
    }
}
