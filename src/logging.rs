//! Tracing/logging initialization.
//!
//! Diagnostics go to stderr so they never interleave with the operator
//! session on stdout.

use crate::cli::LogLevel;
use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// `RUST_LOG` takes precedence over `level`. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
