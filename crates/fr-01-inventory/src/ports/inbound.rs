//! # Inbound Ports
//!
//! What the inventory registry can do.

use crate::domain::{Catalog, InventoryAsset};
use registry_core::{RegistryError, TransactionContext};

/// Inventory registry API - inbound port.
pub trait InventoryApi: Send + Sync {
    /// Seed the namespace. The seed set is empty.
    fn init_ledger(&self, ctx: &TransactionContext<'_>) -> Result<(), RegistryError>;

    /// Register a new asset under `id`.
    fn create_asset(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
        asset_json: &str,
    ) -> Result<InventoryAsset, RegistryError>;

    /// Fetch the asset under `id`.
    fn read_asset(&self, ctx: &TransactionContext<'_>, id: &str)
        -> Result<InventoryAsset, RegistryError>;

    /// Replace the asset under `id`.
    fn update_asset(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
        asset_json: &str,
    ) -> Result<InventoryAsset, RegistryError>;

    /// Remove the asset under `id`.
    fn delete_asset(&self, ctx: &TransactionContext<'_>, id: &str) -> Result<(), RegistryError>;

    /// True when an asset is stored under `id`.
    fn asset_exists(&self, ctx: &TransactionContext<'_>, id: &str) -> Result<bool, RegistryError>;

    /// Re-key the asset under `id` to `new_id`.
    fn transfer_asset(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
        new_id: &str,
    ) -> Result<InventoryAsset, RegistryError>;

    /// Every asset in the namespace.
    fn get_all_assets(&self, ctx: &TransactionContext<'_>)
        -> Result<Vec<InventoryAsset>, RegistryError>;

    /// Assets listed by `catalog`, leaving out `except_id` when given.
    fn list_catalog(
        &self,
        ctx: &TransactionContext<'_>,
        catalog: Catalog,
        except_id: Option<&str>,
    ) -> Result<Vec<InventoryAsset>, RegistryError>;
}
