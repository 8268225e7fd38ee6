//! # Latency Flow
//!
//! Latency rounds recorded against live inventory, with the latency
//! registry reaching inventory through the dispatcher's invoker.

use super::{payload, Fleet, NOW};
use fr_01_inventory::{AssetKind, AssetState, InventoryAsset};
use fr_03_latency::{LatencyAsset, LatencyResult, Timestamp};

fn round(id: &str, source: &str, age_secs: i64, targets: &[&str]) -> String {
    let asset = targets.iter().fold(
        LatencyAsset::new(id, source, Timestamp::from_secs(NOW - age_secs)),
        |asset, target| asset.with_result(LatencyResult::new(*target, 4.25)),
    );
    serde_json::to_string(&asset).unwrap()
}

fn ids(assets: &[LatencyAsset]) -> Vec<&str> {
    let mut ids: Vec<&str> = assets.iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    ids
}

fn seed_inventory(fleet: &Fleet) {
    for (id, kind) in [
        ("srv-1", AssetKind::Server),
        ("srv-2", AssetKind::Server),
        ("sen-1", AssetKind::Sensor),
        ("rob-1", AssetKind::Robot),
    ] {
        let json = serde_json::to_string(&InventoryAsset::new(
            id,
            "rack-a",
            "ops",
            kind,
            AssetState::Enabled,
        ))
        .unwrap();
        assert!(fleet.inventory(&["CreateAsset", id, json.as_str()]).is_success());
    }
}

#[test]
fn test_latency_lists_inventory_through_dispatcher() {
    let fleet = Fleet::deploy();
    seed_inventory(&fleet);

    let servers: Vec<InventoryAsset> = payload(&fleet.latency(&["GetServerAssets"]));
    let mut names: Vec<&str> = servers.iter().map(|a| a.id.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["srv-1", "srv-2"]);

    let others: Vec<InventoryAsset> =
        payload(&fleet.latency(&["GetSensorAndRobotAssetsExceptId", "sen-1"]));
    assert_eq!(others.len(), 1);
    assert_eq!(others[0].kind, AssetKind::Robot);

    // Inventory reads do not write into latency state.
    assert!(fleet.latency_state.is_empty());
}

#[test]
fn test_probe_round_targets_every_listed_server() {
    let fleet = Fleet::deploy();
    seed_inventory(&fleet);

    let servers: Vec<InventoryAsset> = payload(&fleet.latency(&["GetServerAssets"]));
    let targets: Vec<&str> = servers.iter().map(|a| a.id.as_str()).collect();
    let json = round("round-1", "edge-1", 60, &targets);
    assert!(fleet.latency(&["CreateAsset", json.as_str()]).is_success());

    for target in &targets {
        let hits: Vec<LatencyAsset> =
            payload(&fleet.latency(&["GetAssetListTimeTarget", *target, "5"]));
        assert_eq!(ids(&hits), ["round-1"]);
    }
}

#[test]
fn test_inventory_not_deployed_fails_the_call() {
    let fleet = Fleet::empty();
    fleet.deploy_latency();

    let response = fleet.latency(&["GetServerAssets"]);
    assert!(!response.is_success());
    assert!(response.message.contains("inventory-sc"), "{}", response.message);
    assert!(fleet.latency_state.is_empty());
}

#[test]
fn test_time_windows_follow_the_clock() {
    let fleet = Fleet::deploy();
    for json in [
        round("fresh", "edge-1", 30, &["srv-1"]),
        round("older", "edge-1", 20 * 60, &["srv-1", "srv-2"]),
        round("elsewhere", "edge-2", 30, &["srv-2"]),
    ] {
        assert!(fleet.latency(&["CreateAsset", json.as_str()]).is_success());
    }

    let recent: Vec<LatencyAsset> =
        payload(&fleet.latency(&["GetAssetListTimeSource", "edge-1", "10"]));
    assert_eq!(ids(&recent), ["fresh"]);

    let wide: Vec<LatencyAsset> =
        payload(&fleet.latency(&["GetAssetListTimeSource", "edge-1", "30"]));
    assert_eq!(ids(&wide), ["fresh", "older"]);

    let by_target: Vec<LatencyAsset> =
        payload(&fleet.latency(&["GetAssetListTimeTarget", "srv-2", "30"]));
    assert_eq!(ids(&by_target), ["elsewhere", "older"]);

    fleet.clock.advance(3600);
    let later: Vec<LatencyAsset> =
        payload(&fleet.latency(&["GetAssetListTimeSource", "edge-1", "30"]));
    assert!(later.is_empty());
}

#[test]
fn test_rejected_rounds_leave_state_untouched() {
    let fleet = Fleet::deploy();

    let empty = round("round-1", "edge-1", 10, &[]);
    assert!(!fleet.latency(&["CreateAsset", empty.as_str()]).is_success());

    let absent = round("round-2", "edge-1", 10, &["srv-1"]);
    let update = fleet.latency(&["UpdateAsset", absent.as_str()]);
    assert!(update.message.contains("does not exist"));

    let window = fleet.latency(&["GetAssetListTimeSource", "edge-1", "-5"]);
    assert!(!window.is_success());
    assert!(fleet.latency_state.is_empty());
}

proptest::proptest! {
    #![proptest_config(proptest::prelude::ProptestConfig::with_cases(32))]

    #[test]
    fn prop_latency_sees_exactly_the_inventory_servers(
        kinds in proptest::collection::vec(0usize..3, 0..10),
    ) {
        let fleet = Fleet::deploy();
        let mut expected = Vec::new();
        for (index, kind) in kinds.iter().map(|i| AssetKind::ALL[*i]).enumerate() {
            let id = format!("node-{index}");
            let json = serde_json::to_string(&InventoryAsset::new(
                id.as_str(),
                "rack-a",
                "ops",
                kind,
                AssetState::Enabled,
            ))
            .unwrap();
            let created = fleet.inventory(&["CreateAsset", id.as_str(), json.as_str()]);
            proptest::prop_assert!(created.is_success());
            if kind == AssetKind::Server {
                expected.push(id);
            }
        }

        let servers: Vec<InventoryAsset> = payload(&fleet.latency(&["GetServerAssets"]));
        let mut listed: Vec<String> = servers.into_iter().map(|a| a.id).collect();
        listed.sort();
        expected.sort();
        proptest::prop_assert_eq!(listed, expected);
    }
}
