use tracing_subscriber::EnvFilter;
use tracker_config::{DEFAULT_LOG_FILTER, RUST_LOG};

/// Install the global subscriber. Logs go to stderr so stdout only ever
/// carries the requested field value.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
