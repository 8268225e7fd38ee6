//! # Resources Flow
//!
//! Host snapshots reported by agents, addressed under either entry-point
//! spelling.

use super::{payload, Fleet};
use fr_02_resources::ResourceStat;

const REPORT: &str = r#"{
    "drcHost": {"hostId": "h-7", "hostname": " edge-7 ", "ip": "10.0.0.7"},
    "cpu": {"cores": "8", "usage": "12.5"},
    "memory": {"total": "2048", "used": 512},
    "disk": {"total": 100, "used": "75"},
    "gpus": ["A100", " ", "A100", "T4"]
}"#;

#[test]
fn test_snapshot_is_normalized_on_write() {
    let fleet = Fleet::deploy();

    let stat: ResourceStat = payload(&fleet.resources(&["CreateStat", "10.0.0.7", REPORT]));
    assert_eq!(stat.id, "10.0.0.7");
    assert_eq!(stat.host.hostname, "edge-7");
    assert_eq!(stat.metrics.cpu_cores, 8);
    assert_eq!(stat.metrics.memory.usage_percent, 25.0);
    assert_eq!(stat.metrics.disk.usage_percent, 75.0);
    assert_eq!(stat.metrics.gpus, ["A100", "T4"]);

    let read: ResourceStat = payload(&fleet.resources(&["ReadAsset", "10.0.0.7"]));
    assert_eq!(read, stat);
}

#[test]
fn test_aliases_share_one_record() {
    let fleet = Fleet::deploy();
    assert!(fleet.resources(&["CreateAsset", "h", REPORT]).is_success());

    let exists: bool = payload(&fleet.resources(&["StatExists", "h"]));
    assert!(exists);

    let all: Vec<ResourceStat> = payload(&fleet.resources(&["GetAllAssets"]));
    assert_eq!(all.len(), 1);

    assert!(fleet.resources(&["DeleteStat", "h"]).is_success());
    let gone: bool = payload(&fleet.resources(&["AssetExists", "h"]));
    assert!(!gone);
}

#[test]
fn test_registries_keep_separate_state() {
    let fleet = Fleet::deploy();
    assert!(fleet.resources(&["CreateStat", "shared-key", REPORT]).is_success());

    let in_inventory: bool = payload(&fleet.inventory(&["AssetExists", "shared-key"]));
    assert!(!in_inventory);
    assert_eq!(fleet.resources_state.len(), 1);
    assert!(fleet.inventory_state.is_empty());
}

#[test]
fn test_unparseable_counts_are_rejected() {
    let fleet = Fleet::deploy();
    let response = fleet.resources(&[
        "CreateStat",
        "h",
        r#"{"drcHost":{},"cpu":{"cores":"eight"}}"#,
    ]);
    assert!(!response.is_success());
    assert!(response.message.contains("malformed"), "{}", response.message);
    assert!(fleet.resources_state.is_empty());
}
