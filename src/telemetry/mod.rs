//! Logging setup
//!
//! Structured logs go to stderr so they never mix with answers on stdout.
//! `RUST_LOG` overrides the level derived from the verbosity flags.

use crate::cli::Verbosity;
use tracing_subscriber::EnvFilter;

/// Build the log filter for a verbosity level, honouring `RUST_LOG` when set
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
