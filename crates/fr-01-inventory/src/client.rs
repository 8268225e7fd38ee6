//! # Inventory Client
//!
//! Typed access to the kind catalog of a deployed inventory registry, for
//! sibling registries that aggregate over the fleet.

use crate::domain::{Catalog, InventoryAsset};
use crate::service::InventoryContract;
use registry_core::{CrossRegistryClient, RegistryError, TransactionContext};

/// Catalog client for one inventory deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryClient {
    remote: CrossRegistryClient,
}

impl InventoryClient {
    /// Client for the inventory registry `target` in `namespace`.
    pub fn new(target: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            remote: CrossRegistryClient::new(target, namespace),
        }
    }

    /// Client for the default deployment name in `namespace`.
    pub fn in_namespace(namespace: impl Into<String>) -> Self {
        Self::new(InventoryContract::NAME, namespace)
    }

    /// Underlying cross-registry client.
    pub fn remote(&self) -> &CrossRegistryClient {
        &self.remote
    }

    /// Assets listed by `catalog`, optionally leaving out `except_id`.
    pub fn list(
        &self,
        ctx: &TransactionContext<'_>,
        catalog: Catalog,
        except_id: Option<&str>,
    ) -> Result<Vec<InventoryAsset>, RegistryError> {
        match except_id {
            Some(excluded) => self.remote.invoke(ctx, catalog.except_function(), &[excluded]),
            None => self.remote.invoke(ctx, catalog.function(), &[]),
        }
    }

    pub fn get_server_assets(&self, ctx: &TransactionContext<'_>) -> Result<Vec<InventoryAsset>, RegistryError> {
        self.list(ctx, Catalog::Servers, None)
    }

    pub fn get_server_assets_except_id(
        &self,
        ctx: &TransactionContext<'_>,
        exclude_id: &str,
    ) -> Result<Vec<InventoryAsset>, RegistryError> {
        self.list(ctx, Catalog::Servers, Some(exclude_id))
    }

    pub fn get_robot_assets(&self, ctx: &TransactionContext<'_>) -> Result<Vec<InventoryAsset>, RegistryError> {
        self.list(ctx, Catalog::Robots, None)
    }

    pub fn get_robot_assets_except_id(
        &self,
        ctx: &TransactionContext<'_>,
        exclude_id: &str,
    ) -> Result<Vec<InventoryAsset>, RegistryError> {
        self.list(ctx, Catalog::Robots, Some(exclude_id))
    }

    pub fn get_sensor_assets(&self, ctx: &TransactionContext<'_>) -> Result<Vec<InventoryAsset>, RegistryError> {
        self.list(ctx, Catalog::Sensors, None)
    }

    pub fn get_sensor_assets_except_id(
        &self,
        ctx: &TransactionContext<'_>,
        exclude_id: &str,
    ) -> Result<Vec<InventoryAsset>, RegistryError> {
        self.list(ctx, Catalog::Sensors, Some(exclude_id))
    }

    pub fn get_sensor_and_robot_assets(
        &self,
        ctx: &TransactionContext<'_>,
    ) -> Result<Vec<InventoryAsset>, RegistryError> {
        self.list(ctx, Catalog::SensorsAndRobots, None)
    }

    pub fn get_sensor_and_robot_assets_except_id(
        &self,
        ctx: &TransactionContext<'_>,
        exclude_id: &str,
    ) -> Result<Vec<InventoryAsset>, RegistryError> {
        self.list(ctx, Catalog::SensorsAndRobots, Some(exclude_id))
    }
}
