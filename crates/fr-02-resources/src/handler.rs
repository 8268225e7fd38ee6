//! Function-name dispatch for the resource registry.
//!
//! Every function is also exported under its `*Asset` alias
//! (`CreateAsset`, `ReadAsset`, ...) so collectors written against the
//! generic asset names keep working.

use crate::domain::ResourceStat;
use crate::ports::ResourceApi;
use crate::service::ResourceContract;
use registry_core::ports::{reply, Args, ContractError, ContractHandler};
use registry_core::{Record, TransactionContext};

const KIND: &str = ResourceStat::KIND;

impl ContractHandler for ResourceContract {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn call(&self, ctx: &TransactionContext<'_>, args: &Args) -> Result<Vec<u8>, ContractError> {
        match args.function() {
            "InitLedger" => reply(KIND, &self.init_ledger(ctx)?),
            "CreateStat" | "CreateAsset" => {
                let host = args.string(0, "hostKey")?;
                let json = args.string(1, "statJson")?;
                reply(KIND, &self.create_stat(ctx, host, json)?)
            }
            "ReadStat" | "ReadAsset" => reply(KIND, &self.read_stat(ctx, args.string(0, "hostKey")?)?),
            "UpdateStat" | "UpdateAsset" => {
                let host = args.string(0, "hostKey")?;
                let json = args.string(1, "statJson")?;
                reply(KIND, &self.update_stat(ctx, host, json)?)
            }
            "DeleteStat" | "DeleteAsset" => {
                reply(KIND, &self.delete_stat(ctx, args.string(0, "hostKey")?)?)
            }
            "StatExists" | "AssetExists" => {
                reply(KIND, &self.stat_exists(ctx, args.string(0, "hostKey")?)?)
            }
            "TransferStat" | "TransferAsset" => {
                let host = args.string(0, "hostKey")?;
                let new_host = args.string(1, "newHostKey")?;
                reply(KIND, &self.transfer_stat(ctx, host, new_host)?)
            }
            "GetAllStats" | "GetAllAssets" => reply(KIND, &self.get_all_stats(ctx)?),
            other => Err(ContractError::UnknownFunction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_core::adapters::{FixedClock, InMemoryWorldState};
    use registry_core::ports::{dispatch, InvokeResponse};

    fn call(ctx: &TransactionContext<'_>, args: &[&str]) -> InvokeResponse {
        let raw: Vec<Vec<u8>> = args.iter().map(|a| a.as_bytes().to_vec()).collect();
        dispatch(&ResourceContract::default(), ctx, &raw)
    }

    #[test]
    fn test_aliases_reach_the_same_operation() {
        let state = InMemoryWorldState::new();
        let clock = FixedClock::new(0);
        let ctx = TransactionContext::new(&state, &clock);

        let report = r#"{"drcHost":{"hostname":"edge"}}"#;
        assert!(call(&ctx, &["CreateAsset", "h-1", report]).is_success());
        assert_eq!(call(&ctx, &["StatExists", "h-1"]).payload, b"true".to_vec());

        let read = call(&ctx, &["ReadStat", "h-1"]);
        let stat: ResourceStat = serde_json::from_slice(&read.payload).unwrap();
        assert_eq!(stat.host.hostname, "edge");

        assert!(call(&ctx, &["DeleteStat", "h-1"]).is_success());
        assert_eq!(call(&ctx, &["AssetExists", "h-1"]).payload, b"false".to_vec());
    }

    #[test]
    fn test_missing_payload_argument() {
        let state = InMemoryWorldState::new();
        let clock = FixedClock::new(0);
        let ctx = TransactionContext::new(&state, &clock);

        let response = call(&ctx, &["CreateStat", "h-1"]);
        assert_eq!(response.status, InvokeResponse::ERROR);
        assert!(response.message.contains("statJson"));
    }
}
