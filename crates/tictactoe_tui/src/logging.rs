//! Tracing subscriber setup.
//!
//! The interactive UI owns the terminal, so its logs go to a file. The
//! headless commands log to stderr.

use crate::TuiConfig;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Sends logs to the configured log file, without ANSI colours.
pub fn init_file(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sends logs to stderr so stdout stays clean for command output.
pub fn init_stderr(config: &TuiConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
