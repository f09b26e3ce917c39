//! Tracing subscriber setup.
//!
//! Installs a global `tracing-subscriber` registry with an `EnvFilter` built
//! from [`LoggingConfig`] and either human-readable or JSON output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Outcome of [`init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryInit {
    /// This call installed the global subscriber.
    Installed,
    /// A global subscriber was already set; nothing changed.
    AlreadyInstalled,
}

/// Builds the filter for a config, falling back to `info` when the
/// directive does not parse.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber.
///
/// Safe to call more than once: later calls report
/// [`TelemetryInit::AlreadyInstalled`] instead of failing.
pub fn init(config: &LoggingConfig) -> TelemetryInit {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = match config.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    match result {
        Ok(()) => {
            tracing::info!(level = %config.level, format = ?config.format, "Telemetry initialized");
            TelemetryInit::Installed
        }
        Err(_) => TelemetryInit::AlreadyInstalled,
    }
}
