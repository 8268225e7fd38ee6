//! # Inventory Entities

use super::value_objects::{AssetKind, AssetState};
use registry_core::{Record, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of the fleet inventory.
///
/// `properties` is ordered so a record always encodes to the same bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryAsset {
    /// Primary key.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Owning organisation or operator.
    #[serde(default)]
    pub owner: String,
    /// Node kind.
    #[serde(rename = "type")]
    pub kind: AssetKind,
    /// Administrative state.
    pub state: AssetState,
    /// Free-form capabilities, e.g. `GPU: TRUE`.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl InventoryAsset {
    /// Asset with no properties.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        owner: impl Into<String>,
        kind: AssetKind,
        state: AssetState,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
            kind,
            state,
            properties: BTreeMap::new(),
        }
    }

    /// Add a property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// True when the node is in service.
    pub fn is_enabled(&self) -> bool {
        self.state == AssetState::Enabled
    }
}

impl Record for InventoryAsset {
    const KIND: &'static str = "inventory asset";
    type Input = InventoryAsset;

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
}
