//! # Latency Entities
//!
//! One probe round: a source host measured latency to a set of targets at a
//! given instant. The record key travels inside the payload.

use registry_core::domain::{require_elements, require_non_empty};
use registry_core::{Record, ValidationError};
use serde::{Deserialize, Serialize};

/// Dotted path of the round timestamp, for time-window queries.
pub const TIMESTAMP_FIELD: &str = "timestamp.timeSeconds";

/// Embedded sequence of per-target results.
pub const RESULTS_FIELD: &str = "results";

/// Field of a result naming the target host.
pub const HOSTNAME_FIELD: &str = "hostname";

/// Latency measurements of one probe round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyAsset {
    /// Primary key.
    #[serde(default)]
    pub id: String,
    /// Host that ran the probes.
    #[serde(default)]
    pub source: String,
    /// Per-target results, in probe order.
    #[serde(default)]
    pub results: Vec<LatencyResult>,
    /// When the round ran.
    #[serde(default)]
    pub timestamp: Timestamp,
}

/// Measurement towards one target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyResult {
    /// Target host name.
    pub hostname: String,
    /// Target address.
    #[serde(default)]
    pub address: String,
    /// Round-trip time in milliseconds.
    pub latency: f64,
    /// Lost packets, percent.
    #[serde(default)]
    pub packet_loss: f64,
}

/// Seconds/nanoseconds instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamp {
    pub time_seconds: i64,
    #[serde(default)]
    pub time_nanos: i32,
}

impl Timestamp {
    /// Whole-second instant.
    pub fn from_secs(time_seconds: i64) -> Self {
        Self {
            time_seconds,
            time_nanos: 0,
        }
    }
}

impl LatencyResult {
    /// Result towards `hostname` with no address and no loss.
    pub fn new(hostname: impl Into<String>, latency: f64) -> Self {
        Self {
            hostname: hostname.into(),
            address: String::new(),
            latency,
            packet_loss: 0.0,
        }
    }
}

impl LatencyAsset {
    /// Round with no results yet.
    pub fn new(id: impl Into<String>, source: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            results: Vec::new(),
            timestamp,
        }
    }

    /// Append a result.
    #[must_use]
    pub fn with_result(mut self, result: LatencyResult) -> Self {
        self.results.push(result);
        self
    }

    /// True when some result targets `hostname`.
    pub fn measures(&self, hostname: &str) -> bool {
        self.results.iter().any(|r| r.hostname == hostname)
    }
}

impl Record for LatencyAsset {
    const KIND: &'static str = "latency asset";
    type Input = LatencyAsset;

    fn from_input(key: &str, mut input: Self::Input) -> Result<Self, ValidationError> {
        input.id = key.to_string();
        Ok(input)
    }

    fn key(&self) -> &str {
        &self.id
    }

    fn rekey(&mut self, key: &str) {
        self.id = key.to_string();
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_elements(RESULTS_FIELD, &self.results)?;
        require_non_empty("id", &self.id)
    }
}
