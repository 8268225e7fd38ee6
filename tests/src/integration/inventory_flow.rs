//! # Inventory Flow
//!
//! Asset lifecycle driven entirely through function-name dispatch.

use super::{payload, Fleet};
use fr_01_inventory::{AssetKind, AssetState, InventoryAsset};
use serde_json::Value;

fn asset_json(kind: AssetKind, state: AssetState) -> String {
    format!(
        r#"{{"name":"rack-a","owner":"ops","type":{},"state":{}}}"#,
        kind.code(),
        state.code()
    )
}

fn seed(fleet: &Fleet, assets: &[(&str, AssetKind)]) {
    for (id, kind) in assets {
        let json = asset_json(*kind, AssetState::Enabled);
        let created = fleet.inventory(&["CreateAsset", *id, json.as_str()]);
        assert!(created.is_success(), "{}", created.message);
    }
}

#[test]
fn test_server_is_disabled_in_place() {
    let fleet = Fleet::deploy();

    let created: InventoryAsset = payload(&fleet.inventory(&[
        "CreateAsset",
        "srv-1",
        asset_json(AssetKind::Server, AssetState::Enabled).as_str(),
    ]));
    assert_eq!(created.id, "srv-1");

    let exists: bool = payload(&fleet.inventory(&["AssetExists", "srv-1"]));
    assert!(exists);

    let updated = fleet.inventory(&[
        "UpdateAsset",
        "srv-1",
        asset_json(AssetKind::Server, AssetState::Disabled).as_str(),
    ]);
    assert!(updated.is_success());

    let read: InventoryAsset = payload(&fleet.inventory(&["ReadAsset", "srv-1"]));
    assert_eq!(read.state, AssetState::Disabled);
    assert_eq!(read.kind, AssetKind::Server);
    assert_eq!(fleet.inventory_state.len(), 1);
}

#[test]
fn test_wire_form_uses_integer_codes() {
    let fleet = Fleet::deploy();
    seed(&fleet, &[("rob-1", AssetKind::Robot)]);

    let raw: Value = payload(&fleet.inventory(&["ReadAsset", "rob-1"]));
    assert_eq!(raw["type"], 2);
    assert_eq!(raw["state"], 1);
    assert_eq!(raw["id"], "rob-1");
}

#[test]
fn test_error_statuses() {
    let fleet = Fleet::deploy();
    seed(&fleet, &[("srv-1", AssetKind::Server)]);

    let duplicate = fleet.inventory(&[
        "CreateAsset",
        "srv-1",
        asset_json(AssetKind::Server, AssetState::Enabled).as_str(),
    ]);
    assert!(!duplicate.is_success());
    assert!(duplicate.message.contains("already exists"));

    let missing = fleet.inventory(&["DeleteAsset", "srv-9"]);
    assert!(missing.message.contains("does not exist"));

    let unknown = fleet.inventory(&["RebootAsset", "srv-1"]);
    assert!(!unknown.is_success());
    assert!(unknown.message.contains("RebootAsset"));

    let no_args = fleet.inventory(&["ReadAsset"]);
    assert!(!no_args.is_success());
}

#[test]
fn test_catalog_listings_and_exclusion() {
    let fleet = Fleet::deploy();
    seed(
        &fleet,
        &[
            ("srv-1", AssetKind::Server),
            ("sen-1", AssetKind::Sensor),
            ("rob-1", AssetKind::Robot),
            ("rob-2", AssetKind::Robot),
        ],
    );

    let all: Vec<InventoryAsset> = payload(&fleet.inventory(&["GetAllAssets"]));
    assert_eq!(all.len(), 4);

    let mixed: Vec<InventoryAsset> =
        payload(&fleet.inventory(&["GetSensorAndRobotAssetsExceptId", "rob-2"]));
    let mut ids: Vec<&str> = mixed.iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, ["rob-1", "sen-1"]);

    let servers: Vec<InventoryAsset> = payload(&fleet.inventory(&["GetServerAssets"]));
    assert_eq!(servers.len(), 1);
}

#[test]
fn test_transfer_keeps_source_record() {
    let fleet = Fleet::deploy();
    seed(&fleet, &[("sen-1", AssetKind::Sensor)]);

    let moved: InventoryAsset = payload(&fleet.inventory(&["TransferAsset", "sen-1", "sen-7"]));
    assert_eq!(moved.id, "sen-7");

    let source: bool = payload(&fleet.inventory(&["AssetExists", "sen-1"]));
    let target: bool = payload(&fleet.inventory(&["AssetExists", "sen-7"]));
    assert!(source && target);

    let again = fleet.inventory(&["TransferAsset", "sen-1", "sen-7"]);
    assert!(!again.is_success());
}
