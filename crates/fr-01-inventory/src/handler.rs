//! # Entry Points
//!
//! Function-name dispatch for the inventory registry.
//!
//! | Function | Arguments | Reply |
//! |----------|-----------|-------|
//! | `InitLedger` | | `null` |
//! | `CreateAsset` | id, asset JSON | asset |
//! | `ReadAsset` | id | asset |
//! | `UpdateAsset` | id, asset JSON | asset |
//! | `DeleteAsset` | id | `null` |
//! | `AssetExists` | id | bool |
//! | `TransferAsset` | id, new id | asset |
//! | `GetAllAssets` | | asset list |
//! | `Get*Assets` | | asset list |
//! | `Get*AssetsExceptId` | excluded id | asset list |

use crate::domain::{Catalog, InventoryAsset};
use crate::ports::InventoryApi;
use crate::service::InventoryContract;
use registry_core::ports::{reply, Args, ContractError, ContractHandler};
use registry_core::{Record, TransactionContext};

const KIND: &str = InventoryAsset::KIND;

impl ContractHandler for InventoryContract {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn call(&self, ctx: &TransactionContext<'_>, args: &Args) -> Result<Vec<u8>, ContractError> {
        match args.function() {
            "InitLedger" => reply(KIND, &self.init_ledger(ctx)?),
            "CreateAsset" => {
                let id = args.string(0, "id")?;
                let json = args.string(1, "assetJson")?;
                reply(KIND, &self.create_asset(ctx, id, json)?)
            }
            "ReadAsset" => reply(KIND, &self.read_asset(ctx, args.string(0, "id")?)?),
            "UpdateAsset" => {
                let id = args.string(0, "id")?;
                let json = args.string(1, "assetJson")?;
                reply(KIND, &self.update_asset(ctx, id, json)?)
            }
            "DeleteAsset" => reply(KIND, &self.delete_asset(ctx, args.string(0, "id")?)?),
            "AssetExists" => reply(KIND, &self.asset_exists(ctx, args.string(0, "id")?)?),
            "TransferAsset" => {
                let id = args.string(0, "id")?;
                let new_id = args.string(1, "newId")?;
                reply(KIND, &self.transfer_asset(ctx, id, new_id)?)
            }
            "GetAllAssets" => reply(KIND, &self.get_all_assets(ctx)?),
            other => match Catalog::from_function(other) {
                Some((catalog, false)) => reply(KIND, &self.list_catalog(ctx, catalog, None)?),
                Some((catalog, true)) => {
                    let excluded = args.string(0, "excludeId")?;
                    reply(KIND, &self.list_catalog(ctx, catalog, Some(excluded))?)
                }
                None => Err(ContractError::UnknownFunction(other.to_string())),
            },
        }
    }
}
