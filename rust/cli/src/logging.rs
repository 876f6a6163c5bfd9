//! Tracing subscriber setup for the `holdem` binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

pub const DEFAULT_FILTER: &str = "info,holdem_engine=info";

/// Installs a fmt subscriber writing to stderr. `RUST_LOG` overrides
/// [`DEFAULT_FILTER`]. A second call is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
