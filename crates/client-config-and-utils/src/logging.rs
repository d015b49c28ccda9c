//! Logging initialization for the client.

use tracing_subscriber::EnvFilter;

/// Initialize the logging system for the client.
///
/// Sets up tracing with the log level from the RUST_LOG env var or the
/// provided default. Safe to call more than once; later calls are no-ops.
///
/// # Example
///
/// ```ignore
/// init_logging("info");
/// tracing::info!("Client started");
/// ```
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
