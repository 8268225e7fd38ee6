//! Configuration for registry instances.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// What `Transfer` does with the source key after writing the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferPolicy {
    /// Keep the record under the old key as well.
    #[default]
    RetainSource,
    /// Delete the old key once the new one is written.
    MoveSource,
}

impl FromStr for TransferPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" | "retain_source" | "copy" => Ok(Self::RetainSource),
            "move" | "move_source" => Ok(Self::MoveSource),
            other => Err(format!("unknown transfer policy `{other}`")),
        }
    }
}

impl fmt::Display for TransferPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RetainSource => f.write_str("retain_source"),
            Self::MoveSource => f.write_str("move_source"),
        }
    }
}

/// Registry configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Namespace (channel) the registries are deployed in.
    pub namespace: String,
    /// Source-key handling for `Transfer`.
    pub transfer_policy: TransferPolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            namespace: "mychannel".to_string(),
            transfer_policy: TransferPolicy::RetainSource,
        }
    }
}

impl RegistryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FLEET_NAMESPACE`: namespace (default: mychannel)
    /// - `FLEET_TRANSFER_POLICY`: `retain` or `move` (default: retain)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let transfer_policy = match lookup("FLEET_TRANSFER_POLICY") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "ignoring FLEET_TRANSFER_POLICY");
                defaults.transfer_policy
            }),
            None => defaults.transfer_policy,
        };

        Self {
            namespace: lookup("FLEET_NAMESPACE").unwrap_or(defaults.namespace),
            transfer_policy,
        }
    }
}
