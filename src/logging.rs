//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::{Settings, DEFAULT_LOG};

/// Installs a stderr `tracing` subscriber filtered by `settings.log_filter`.
///
/// An unparsable filter falls back to [`DEFAULT_LOG`]. Calling this again
/// after a subscriber is installed does nothing.
pub fn init(settings: &Settings) {
    let filter =
        EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
