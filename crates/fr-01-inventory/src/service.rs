//! # Inventory Service
//!
//! [`InventoryApi`] over the generic registry engine.

use crate::domain::{Catalog, InventoryAsset};
use crate::ports::InventoryApi;
use fleet_telemetry::log_registry_event;
use registry_core::{QueryEngine, Registry, RegistryConfig, RegistryError, Selector, TransactionContext};

/// Inventory registry.
#[derive(Clone, Debug, Default)]
pub struct InventoryContract {
    registry: Registry<InventoryAsset>,
    query: QueryEngine<InventoryAsset>,
}

impl InventoryContract {
    /// Deployed contract name.
    pub const NAME: &'static str = "inventory-sc";

    /// Create with `config`.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            registry: Registry::new(config),
            query: QueryEngine::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        self.registry.config()
    }
}

impl InventoryApi for InventoryContract {
    fn init_ledger(&self, ctx: &TransactionContext<'_>) -> Result<(), RegistryError> {
        log_registry_event!(info, Self::NAME, "ledger initialised", tx_id = ctx.tx_id());
        Ok(())
    }

    fn create_asset(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
        asset_json: &str,
    ) -> Result<InventoryAsset, RegistryError> {
        self.registry.create(ctx, id, asset_json)
    }

    fn read_asset(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
    ) -> Result<InventoryAsset, RegistryError> {
        self.registry.read(ctx, id)
    }

    fn update_asset(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
        asset_json: &str,
    ) -> Result<InventoryAsset, RegistryError> {
        self.registry.update(ctx, id, asset_json)
    }

    fn delete_asset(&self, ctx: &TransactionContext<'_>, id: &str) -> Result<(), RegistryError> {
        self.registry.delete(ctx, id)
    }

    fn asset_exists(&self, ctx: &TransactionContext<'_>, id: &str) -> Result<bool, RegistryError> {
        self.registry.exists(ctx, id)
    }

    fn transfer_asset(
        &self,
        ctx: &TransactionContext<'_>,
        id: &str,
        new_id: &str,
    ) -> Result<InventoryAsset, RegistryError> {
        self.registry.transfer(ctx, id, new_id)
    }

    fn get_all_assets(
        &self,
        ctx: &TransactionContext<'_>,
    ) -> Result<Vec<InventoryAsset>, RegistryError> {
        self.query.scan_all(ctx)
    }

    fn list_catalog(
        &self,
        ctx: &TransactionContext<'_>,
        catalog: Catalog,
        except_id: Option<&str>,
    ) -> Result<Vec<InventoryAsset>, RegistryError> {
        let mut assets = Vec::new();
        for kind in catalog.kinds() {
            assets.extend(self.query.query(ctx, &Selector::eq("type", kind.code()))?);
        }
        if let Some(excluded) = except_id {
            assets.retain(|asset| asset.id != excluded);
        }
        log_registry_event!(
            debug,
            Self::NAME,
            "catalog listed",
            catalog = catalog.function(),
            count = assets.len(),
            tx_id = ctx.tx_id()
        );
        Ok(assets)
    }
}
