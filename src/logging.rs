//! Tracing setup
//!
//! Filter comes from `RUST_LOG`, falling back to `warn`. Line modes log to stderr;
//! the TUI owns the terminal, so it logs to a file instead.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Log file used by the TUI
pub const TUI_LOG_FILE: &str = "crossword_tui.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr
pub fn init_stderr() {
    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to a file, truncating it
///
/// # Errors
/// Returns an error if the file cannot be created
pub fn init_file(path: impl AsRef<Path>) -> std::io::Result<()> {
    let log_file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
