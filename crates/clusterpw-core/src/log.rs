//! Logging system for clusterpw.
//!
//! Diagnostics go to stderr through `tracing`; stdout stays reserved for
//! notices and command output so it can be captured by provisioning hooks.

use clusterpw_types::{LogConfig, LogFormat, ProvisionError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter for a configuration. `RUST_LOG` wins when set.
pub fn filter_for(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()))
}

/// Initialize the logging system from configuration.
pub fn init(config: &LogConfig) -> Result<()> {
    let builder = fmt()
        .with_env_filter(filter_for(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    let installed = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| ProvisionError::Other(format!("Failed to initialize logging: {}", e)))
}

