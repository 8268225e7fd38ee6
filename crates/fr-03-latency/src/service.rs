//! # Latency Service
//!
//! Probe-round CRUD, time-windowed lookups by source and by target, and
//! passthrough listings of the fleet inventory.

use crate::config::LatencyConfig;
use crate::domain::{LatencyAsset, HOSTNAME_FIELD, RESULTS_FIELD, TIMESTAMP_FIELD};
use crate::ports::LatencyApi;
use fleet_telemetry::log_registry_event;
use fr_01_inventory::{Catalog, InventoryAsset, InventoryClient};
use registry_core::codec;
use registry_core::{
    QueryEngine, Record, Registry, RegistryError, Selector, TimeWindow, TransactionContext,
};

/// Latency registry.
#[derive(Clone, Debug)]
pub struct LatencyContract {
    registry: Registry<LatencyAsset>,
    query: QueryEngine<LatencyAsset>,
    inventory: InventoryClient,
}

impl Default for LatencyContract {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

impl LatencyContract {
    /// Deployed contract name.
    pub const NAME: &'static str = "latency-sc";

    /// Create with `config`.
    pub fn new(config: LatencyConfig) -> Self {
        let inventory = InventoryClient::new(config.inventory_registry, config.registry.namespace.clone());
        Self {
            registry: Registry::new(config.registry),
            query: QueryEngine::new(),
            inventory,
        }
    }

    /// Client used for inventory listings.
    pub fn inventory(&self) -> &InventoryClient {
        &self.inventory
    }

    fn decode(asset_json: &str) -> Result<LatencyAsset, RegistryError> {
        codec::decode_payload(LatencyAsset::KIND, asset_json)
    }
}

impl LatencyApi for LatencyContract {
    fn init_ledger(&self, ctx: &TransactionContext<'_>) -> Result<(), RegistryError> {
        log_registry_event!(info, Self::NAME, "ledger initialised", tx_id = ctx.tx_id());
        Ok(())
    }

    fn create_asset(
        &self,
        ctx: &TransactionContext<'_>,
        asset_json: &str,
    ) -> Result<LatencyAsset, RegistryError> {
        self.registry.insert(ctx, Self::decode(asset_json)?)
    }

    fn read_asset(&self, ctx: &TransactionContext<'_>, id: &str) -> Result<LatencyAsset, RegistryError> {
        self.registry.read(ctx, id)
    }

    fn update_asset(
        &self,
        ctx: &TransactionContext<'_>,
        asset_json: &str,
    ) -> Result<LatencyAsset, RegistryError> {
        self.registry.replace(ctx, Self::decode(asset_json)?)
    }

    fn delete_asset(&self, ctx: &TransactionContext<'_>, id: &str) -> Result<(), RegistryError> {
        self.registry.delete(ctx, id)
    }

    fn asset_exists(&self, ctx: &TransactionContext<'_>, id: &str) -> Result<bool, RegistryError> {
        self.registry.exists(ctx, id)
    }

    fn get_all_assets(&self, ctx: &TransactionContext<'_>) -> Result<Vec<LatencyAsset>, RegistryError> {
        self.query.scan_all(ctx)
    }

    fn get_asset_list_time_source(
        &self,
        ctx: &TransactionContext<'_>,
        source: &str,
        minutes: u32,
    ) -> Result<Vec<LatencyAsset>, RegistryError> {
        self.query.query_by_time_window_where(
            ctx,
            TimeWindow::new(TIMESTAMP_FIELD, minutes),
            Some(Selector::eq("source", source)),
        )
    }

    fn get_asset_list_time_target(
        &self,
        ctx: &TransactionContext<'_>,
        target: &str,
        minutes: u32,
    ) -> Result<Vec<LatencyAsset>, RegistryError> {
        self.query.query_by_nested_match(
            ctx,
            RESULTS_FIELD,
            HOSTNAME_FIELD,
            target,
            TimeWindow::new(TIMESTAMP_FIELD, minutes),
        )
    }

    fn inventory_assets(
        &self,
        ctx: &TransactionContext<'_>,
        catalog: Catalog,
        except_id: Option<&str>,
    ) -> Result<Vec<InventoryAsset>, RegistryError> {
        self.inventory.list(ctx, catalog, except_id)
    }
}
