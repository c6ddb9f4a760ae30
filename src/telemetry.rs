//! Tracing/logging initialization.

use crate::TelemetryConfig;
use tracing_subscriber::EnvFilter;

/// Installs the process-wide tracing subscriber.
///
/// `RUST_LOG` overrides the configured level. Safe to call more than once;
/// later calls are no-ops.
pub fn init(config: &TelemetryConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
