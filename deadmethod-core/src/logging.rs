//! Structured logging via **tracing**.
//!
//! Analysis results go to stdout; all logging goes to stderr as JSON so
//! the tool output stays machine-readable. Works without contention under
//! Rayon's parallel per-unit workers.

use tracing::{error, info, warn};

/// Initializes the global tracing collector (subscriber).
///
/// This should be called *once* at the beginning of the application's
/// runtime. It configures structured JSON output to stderr.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=deadmethod=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Logs a warning event.
pub fn log_warn(message: &str) {
    warn!(detail = %message);
}

/// Logs an info event.
pub fn log_info(message: &str) {
    info!(detail = %message);
}

/// Logs an error event.
pub fn log_error(message: &str) {
    error!(detail = %message);
}
