// Logging setup.
// Installs a tracing fmt subscriber on stderr, filtered by RUST_LOG or --log-level.

use tracing_subscriber::EnvFilter;

use crate::error::{NotesError, Result};

/// Filter used when RUST_LOG is unset: dependencies at warn, this crate at `level`.
pub fn default_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(format!("warn,jlpt_notes={}", level.trim()))
        .map_err(|e| NotesError::Config(format!("invalid log level '{}': {}", level, e)))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => default_filter(level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| NotesError::Other(format!("failed to initialize logging: {}", e)))
}
