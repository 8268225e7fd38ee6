//! Shared fixtures for unit tests.

use crate::domain::{require_elements, require_non_empty, Record, ValidationError};
use serde::{Deserialize, Serialize};

/// Minimal record kind used to exercise the generic engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Probe {
    pub id: String,
    pub weight: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub seen_at: i64,
    #[serde(default)]
    pub peers: Vec<Peer>,
}

/// Nested element of a [`Probe`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Peer {
    pub hostname: String,
}

impl Probe {
    pub fn new(id: &str, weight: u32) -> Self {
        Self {
            id: id.to_string(),
            weight,
            tags: vec!["default".to_string()],
            seen_at: 0,
            peers: Vec::new(),
        }
    }

    pub fn peer(mut self, hostname: &str) -> Self {
        self.peers.push(Peer {
            hostname: hostname.to_string(),
        });
        self
    }

    pub fn seen(mut self, seen_at: i64) -> Self {
        self.seen_at = seen_at;
        self
    }

    pub fn payload(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

impl Record for Probe {
    const KIND: &'static str = "probe";
    type Input = Probe;

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
        require_non_empty("id", &self.id)?;
        require_elements("tags", &self.tags)
    }
}
