//! # Resource Entities
//!
//! Canonical stored form of a resource report.

use super::report::{CapacityReport, HostReport, ResourceReport};
use registry_core::domain::{require_non_empty, require_non_negative};
use registry_core::{Record, ValidationError};
use serde::{Deserialize, Serialize};

/// Normalized resource snapshot of one host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStat {
    /// Primary key, the host key the caller supplied.
    pub id: String,
    /// Who reported.
    pub host: HostIdentity,
    /// What was reported.
    pub metrics: ResourceMetrics,
}

/// Identity of the reporting host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostIdentity {
    pub host_id: String,
    pub hostname: String,
    pub ip: String,
    pub os: String,
    pub arch: String,
}

/// Resource figures of one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMetrics {
    pub cpu_cores: u32,
    /// CPU utilisation percent as reported.
    pub cpu_usage: f64,
    pub memory: Capacity,
    pub disk: Capacity,
    /// Sorted, without duplicates.
    pub gpus: Vec<String>,
    /// Collection time, unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<i64>,
}

/// Total/used pair with derived utilisation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    pub total: f64,
    pub used: f64,
    /// `used / total` in percent; 0 when `total` is 0.
    pub usage_percent: f64,
}

impl Capacity {
    /// Capacity with utilisation derived from `used` and `total`.
    pub fn new(total: f64, used: f64) -> Self {
        let usage_percent = if total > 0.0 { used / total * 100.0 } else { 0.0 };
        Self {
            total,
            used,
            usage_percent,
        }
    }
}

impl Capacity {
    fn validate(
        &self,
        total: &'static str,
        used: &'static str,
        percent: &'static str,
    ) -> Result<(), ValidationError> {
        require_non_negative(total, self.total)?;
        require_non_negative(used, self.used)?;
        require_non_negative(percent, self.usage_percent)
    }
}

impl From<CapacityReport> for Capacity {
    fn from(report: CapacityReport) -> Self {
        Capacity::new(report.total, report.used)
    }
}

impl From<HostReport> for HostIdentity {
    fn from(report: HostReport) -> Self {
        Self {
            host_id: report.host_id.trim().to_string(),
            hostname: report.hostname.trim().to_string(),
            ip: report.ip.trim().to_string(),
            os: report.os.trim().to_string(),
            arch: report.arch.trim().to_string(),
        }
    }
}

impl ResourceStat {
    /// Normalize `report` into the snapshot stored under `id`.
    pub fn from_report(id: &str, report: ResourceReport) -> Self {
        let mut gpus: Vec<String> = report
            .gpus
            .into_iter()
            .map(|gpu| gpu.trim().to_string())
            .filter(|gpu| !gpu.is_empty())
            .collect();
        gpus.sort();
        gpus.dedup();

        Self {
            id: id.to_string(),
            host: report.drc_host.into(),
            metrics: ResourceMetrics {
                cpu_cores: report.cpu.cores,
                cpu_usage: report.cpu.usage,
                memory: report.memory.into(),
                disk: report.disk.into(),
                gpus,
                collected_at: report.collected_at,
            },
        }
    }
}

impl Record for ResourceStat {
    const KIND: &'static str = "resource stat";
    type Input = ResourceReport;

    fn from_input(key: &str, input: Self::Input) -> Result<Self, ValidationError> {
        Ok(Self::from_report(key, input))
    }

    fn key(&self) -> &str {
        &self.id
    }

    fn rekey(&mut self, key: &str) {
        self.id = key.to_string();
    }

    /// Non-empty key; every figure finite and non-negative.
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("id", &self.id)?;
        require_non_negative("cpu.usage", self.metrics.cpu_usage)?;
        self.metrics
            .memory
            .validate("memory.total", "memory.used", "memory.usagePercent")?;
        self.metrics
            .disk
            .validate("disk.total", "disk.used", "disk.usagePercent")
    }
}
