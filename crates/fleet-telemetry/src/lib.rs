//! # Fleet Telemetry
//!
//! Logging setup shared by the fleet registries and their hosts.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fleet_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::for_registry("inventory-sc");
//!     init_logging(&config).expect("Failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FLEET_SERVICE_NAME` | `fleet-registry` | Service name in log lines |
//! | `FLEET_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `FLEET_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `FLEET_JSON_LOGS` | `false` (`true` in containers) | JSON lines output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),

    /// The log filter directives do not parse.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
