//! # Inbound Ports

use crate::domain::ResourceStat;
use registry_core::{RegistryError, TransactionContext};

/// Resource registry API - inbound port.
pub trait ResourceApi: Send + Sync {
    /// Seed the namespace. The seed set is empty.
    fn init_ledger(&self, ctx: &TransactionContext<'_>) -> Result<(), RegistryError>;

    /// Store a normalized snapshot of `report_json` under `host_key`.
    fn create_stat(
        &self,
        ctx: &TransactionContext<'_>,
        host_key: &str,
        report_json: &str,
    ) -> Result<ResourceStat, RegistryError>;

    /// Fetch the snapshot under `host_key`.
    fn read_stat(&self, ctx: &TransactionContext<'_>, host_key: &str)
        -> Result<ResourceStat, RegistryError>;

    /// Replace the snapshot under `host_key`.
    fn update_stat(
        &self,
        ctx: &TransactionContext<'_>,
        host_key: &str,
        report_json: &str,
    ) -> Result<ResourceStat, RegistryError>;

    /// Remove the snapshot under `host_key`.
    fn delete_stat(&self, ctx: &TransactionContext<'_>, host_key: &str) -> Result<(), RegistryError>;

    /// True when a snapshot is stored under `host_key`.
    fn stat_exists(&self, ctx: &TransactionContext<'_>, host_key: &str) -> Result<bool, RegistryError>;

    /// Re-key the snapshot under `host_key` to `new_host_key`.
    fn transfer_stat(
        &self,
        ctx: &TransactionContext<'_>,
        host_key: &str,
        new_host_key: &str,
    ) -> Result<ResourceStat, RegistryError>;

    /// Every snapshot in the namespace.
    fn get_all_stats(&self, ctx: &TransactionContext<'_>) -> Result<Vec<ResourceStat>, RegistryError>;
}
