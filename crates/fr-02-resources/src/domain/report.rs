//! # Collector Report
//!
//! The loosely typed payload a resource collector posts. Only `drcHost` is
//! required; every other section defaults to zero.

use super::lenient;
use serde::Deserialize;

/// Raw report as posted by a collector.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReport {
    /// Reporting host.
    pub drc_host: HostReport,
    /// CPU section.
    #[serde(default)]
    pub cpu: CpuReport,
    /// Memory section.
    #[serde(default)]
    pub memory: CapacityReport,
    /// Disk section.
    #[serde(default)]
    pub disk: CapacityReport,
    /// GPU model names.
    #[serde(default)]
    pub gpus: Vec<String>,
    /// Collection time, unix seconds.
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub collected_at: Option<i64>,
}

/// Host identification block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostReport {
    pub host_id: String,
    pub hostname: String,
    pub ip: String,
    pub os: String,
    pub arch: String,
}

/// CPU block.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CpuReport {
    #[serde(default, deserialize_with = "lenient::count")]
    pub cores: u32,
    /// Utilisation percent.
    #[serde(default, deserialize_with = "lenient::number")]
    pub usage: f64,
}

/// Capacity block, in whatever unit the collector uses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CapacityReport {
    #[serde(default, deserialize_with = "lenient::number")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub used: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_report() {
        let report: ResourceReport = serde_json::from_str(
            r#"{
                "drcHost": {"hostId": "h-1", "hostname": "edge-1", "ip": "10.0.0.4", "os": "linux", "arch": "arm64"},
                "cpu": {"cores": "4", "usage": 37.5},
                "memory": {"total": "8192", "used": 2048},
                "disk": {"total": 500, "used": "125"},
                "gpus": ["jetson"],
                "collectedAt": 1700000000
            }"#,
        )
        .unwrap();

        assert_eq!(report.drc_host.hostname, "edge-1");
        assert_eq!(report.cpu.cores, 4);
        assert_eq!(report.memory.total, 8192.0);
        assert_eq!(report.disk.used, 125.0);
        assert_eq!(report.collected_at, Some(1_700_000_000));
    }

    #[test]
    fn test_minimal_report() {
        let report: ResourceReport = serde_json::from_str(r#"{"drcHost":{}}"#).unwrap();
        assert_eq!(report, ResourceReport::default());
    }

    #[test]
    fn test_collection_time_as_text() {
        let report: ResourceReport =
            serde_json::from_str(r#"{"drcHost":{},"collectedAt":"1700000000"}"#).unwrap();
        assert_eq!(report.collected_at, Some(1_700_000_000));

        let report: ResourceReport =
            serde_json::from_str(r#"{"drcHost":{},"collectedAt":null}"#).unwrap();
        assert_eq!(report.collected_at, None);
    }

    #[test]
    fn test_host_block_is_required() {
        assert!(serde_json::from_str::<ResourceReport>(r#"{"cpu":{"cores":1}}"#).is_err());
    }
}
