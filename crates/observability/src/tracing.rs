//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the JSON fmt subscriber for the process.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Calling this
/// again after a subscriber is installed is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
