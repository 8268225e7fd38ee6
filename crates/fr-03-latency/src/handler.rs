//! # Entry Points
//!
//! Function-name dispatch for the latency registry. The inventory catalog
//! names (`GetServerAssets`, `GetRobotAssetsExceptId`, ...) are re-exported
//! here and forwarded to the inventory registry.

use crate::domain::LatencyAsset;
use crate::ports::LatencyApi;
use crate::service::LatencyContract;
use fr_01_inventory::{Catalog, InventoryAsset};
use registry_core::ports::{reply, Args, ContractError, ContractHandler};
use registry_core::{Record, TransactionContext};

const KIND: &str = LatencyAsset::KIND;

impl ContractHandler for LatencyContract {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn call(&self, ctx: &TransactionContext<'_>, args: &Args) -> Result<Vec<u8>, ContractError> {
        match args.function() {
            "InitLedger" => reply(KIND, &self.init_ledger(ctx)?),
            "CreateAsset" => reply(KIND, &self.create_asset(ctx, args.string(0, "assetJson")?)?),
            "ReadAsset" => reply(KIND, &self.read_asset(ctx, args.string(0, "assetKey")?)?),
            "UpdateAsset" => reply(KIND, &self.update_asset(ctx, args.string(0, "assetJson")?)?),
            "DeleteAsset" => reply(KIND, &self.delete_asset(ctx, args.string(0, "assetKey")?)?),
            "AssetExists" => reply(KIND, &self.asset_exists(ctx, args.string(0, "assetKey")?)?),
            "GetAllAssets" => reply(KIND, &self.get_all_assets(ctx)?),
            "GetAssetListTimeSource" => {
                let source = args.string(0, "source")?;
                let minutes = args.minutes(1, "minutes")?;
                reply(KIND, &self.get_asset_list_time_source(ctx, source, minutes)?)
            }
            "GetAssetListTimeTarget" => {
                let target = args.string(0, "target")?;
                let minutes = args.minutes(1, "minutes")?;
                reply(KIND, &self.get_asset_list_time_target(ctx, target, minutes)?)
            }
            other => match Catalog::from_function(other) {
                Some((catalog, except)) => {
                    let excluded = if except {
                        Some(args.string(0, "excludeId")?)
                    } else {
                        None
                    };
                    reply(
                        InventoryAsset::KIND,
                        &self.inventory_assets(ctx, catalog, excluded)?,
                    )
                }
                None => Err(ContractError::UnknownFunction(other.to_string())),
            },
        }
    }
}
