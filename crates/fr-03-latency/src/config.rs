//! Latency registry configuration.

use fr_01_inventory::InventoryContract;
use registry_core::RegistryConfig;
use serde::{Deserialize, Serialize};
use std::env;

/// Latency registry configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Shared registry settings.
    pub registry: RegistryConfig,
    /// Name of the inventory registry to aggregate over.
    pub inventory_registry: String,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            inventory_registry: InventoryContract::NAME.to_string(),
        }
    }
}

impl LatencyConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FLEET_INVENTORY_REGISTRY`: inventory registry name (default: inventory-sc)
    /// - plus those read by [`RegistryConfig::from_env`]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let inventory_registry = lookup("FLEET_INVENTORY_REGISTRY")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| InventoryContract::NAME.to_string());
        Self {
            registry: RegistryConfig::from_lookup(lookup),
            inventory_registry,
        }
    }
}
