//! # Inbound Ports

use crate::domain::LatencyAsset;
use fr_01_inventory::{Catalog, InventoryAsset};
use registry_core::{RegistryError, TransactionContext};

/// Latency registry API - inbound port.
pub trait LatencyApi: Send + Sync {
    /// Seed the namespace. The seed set is empty.
    fn init_ledger(&self, ctx: &TransactionContext<'_>) -> Result<(), RegistryError>;

    /// Store a new probe round; the key is the payload's `id`.
    fn create_asset(&self, ctx: &TransactionContext<'_>, asset_json: &str)
        -> Result<LatencyAsset, RegistryError>;

    /// Fetch the round under `id`.
    fn read_asset(&self, ctx: &TransactionContext<'_>, id: &str) -> Result<LatencyAsset, RegistryError>;

    /// Replace an existing round; the key is the payload's `id`.
    fn update_asset(&self, ctx: &TransactionContext<'_>, asset_json: &str)
        -> Result<LatencyAsset, RegistryError>;

    /// Remove the round under `id`.
    fn delete_asset(&self, ctx: &TransactionContext<'_>, id: &str) -> Result<(), RegistryError>;

    /// True when a round is stored under `id`.
    fn asset_exists(&self, ctx: &TransactionContext<'_>, id: &str) -> Result<bool, RegistryError>;

    /// Every round in the namespace.
    fn get_all_assets(&self, ctx: &TransactionContext<'_>) -> Result<Vec<LatencyAsset>, RegistryError>;

    /// Rounds run by `source` in the last `minutes`.
    fn get_asset_list_time_source(
        &self,
        ctx: &TransactionContext<'_>,
        source: &str,
        minutes: u32,
    ) -> Result<Vec<LatencyAsset>, RegistryError>;

    /// Rounds from the last `minutes` that measured `target`.
    fn get_asset_list_time_target(
        &self,
        ctx: &TransactionContext<'_>,
        target: &str,
        minutes: u32,
    ) -> Result<Vec<LatencyAsset>, RegistryError>;

    /// Inventory catalog listing, fetched from the inventory registry.
    fn inventory_assets(
        &self,
        ctx: &TransactionContext<'_>,
        catalog: Catalog,
        except_id: Option<&str>,
    ) -> Result<Vec<InventoryAsset>, RegistryError>;
}
