//! # Resource Service

use crate::domain::ResourceStat;
use crate::ports::ResourceApi;
use fleet_telemetry::log_registry_event;
use registry_core::{QueryEngine, Registry, RegistryConfig, RegistryError, TransactionContext};

/// Resource registry.
#[derive(Clone, Debug, Default)]
pub struct ResourceContract {
    registry: Registry<ResourceStat>,
    query: QueryEngine<ResourceStat>,
}

impl ResourceContract {
    /// Deployed contract name.
    pub const NAME: &'static str = "resources-sc";

    /// Create with `config`.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            registry: Registry::new(config),
            query: QueryEngine::new(),
        }
    }
}

impl ResourceApi for ResourceContract {
    fn init_ledger(&self, ctx: &TransactionContext<'_>) -> Result<(), RegistryError> {
        log_registry_event!(info, Self::NAME, "ledger initialised", tx_id = ctx.tx_id());
        Ok(())
    }

    fn create_stat(
        &self,
        ctx: &TransactionContext<'_>,
        host_key: &str,
        report_json: &str,
    ) -> Result<ResourceStat, RegistryError> {
        self.registry.create(ctx, host_key, report_json)
    }

    fn read_stat(
        &self,
        ctx: &TransactionContext<'_>,
        host_key: &str,
    ) -> Result<ResourceStat, RegistryError> {
        self.registry.read(ctx, host_key)
    }

    fn update_stat(
        &self,
        ctx: &TransactionContext<'_>,
        host_key: &str,
        report_json: &str,
    ) -> Result<ResourceStat, RegistryError> {
        self.registry.update(ctx, host_key, report_json)
    }

    fn delete_stat(&self, ctx: &TransactionContext<'_>, host_key: &str) -> Result<(), RegistryError> {
        self.registry.delete(ctx, host_key)
    }

    fn stat_exists(&self, ctx: &TransactionContext<'_>, host_key: &str) -> Result<bool, RegistryError> {
        self.registry.exists(ctx, host_key)
    }

    fn transfer_stat(
        &self,
        ctx: &TransactionContext<'_>,
        host_key: &str,
        new_host_key: &str,
    ) -> Result<ResourceStat, RegistryError> {
        self.registry.transfer(ctx, host_key, new_host_key)
    }

    fn get_all_stats(&self, ctx: &TransactionContext<'_>) -> Result<Vec<ResourceStat>, RegistryError> {
        self.query.scan_all(ctx)
    }
}
