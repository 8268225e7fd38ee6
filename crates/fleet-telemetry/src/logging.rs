//! Structured logging setup.
//!
//! Installs one global `tracing` subscriber: an `EnvFilter` built from
//! `RUST_LOG` (or the configured level) and either a JSON layer for log
//! shippers or a human-readable layer for development.

use crate::{TelemetryConfig, TelemetryError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the level filter for `config`. `RUST_LOG` wins when set.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Config(e.to_string()))
}

/// Install the global subscriber described by `config`.
///
/// Fails with [`TelemetryError::AlreadyInitialized`] when a global
/// subscriber is already set.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    let json_layer = (config.console_output && config.json_logs).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
    });
    let fmt_layer = (config.console_output && !config.json_logs).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "logging initialized"
    );
    Ok(())
}

/// Log a registry event with the `registry` field set.
///
/// # Example
///
/// ```rust,ignore
/// log_registry_event!(info, "inventory-sc", "ledger initialised", tx_id = ctx.tx_id());
/// ```
#[macro_export]
macro_rules! log_registry_event {
    ($level:ident, $registry:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            registry = $registry,
            $($($field)*,)?
            $msg
        )
    };
}
