//! Tracing subscriber set-up.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Install the global subscriber. `RUST_LOG` overrides the configured filter.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
