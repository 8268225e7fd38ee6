//! # Inventory Value Objects
//!
//! Closed enumerations of the inventory record. On the wire both are plain
//! integer codes; any other integer fails decoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An integer that names no variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown {field} code {code}")]
pub struct UnknownCode {
    /// Field being decoded.
    pub field: &'static str,
    /// Rejected code.
    pub code: u8,
}

/// Kind of fleet node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AssetKind {
    /// Compute server (code 0).
    Server,
    /// Sensor node (code 1).
    Sensor,
    /// Robot or drone (code 2).
    Robot,
}

impl AssetKind {
    /// Every kind, in code order.
    pub const ALL: [AssetKind; 3] = [AssetKind::Server, AssetKind::Sensor, AssetKind::Robot];

    /// Wire code.
    pub fn code(self) -> u8 {
        match self {
            AssetKind::Server => 0,
            AssetKind::Sensor => 1,
            AssetKind::Robot => 2,
        }
    }
}

impl From<AssetKind> for u8 {
    fn from(kind: AssetKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u8> for AssetKind {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AssetKind::Server),
            1 => Ok(AssetKind::Sensor),
            2 => Ok(AssetKind::Robot),
            code => Err(UnknownCode { field: "type", code }),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Server => f.write_str("server"),
            AssetKind::Sensor => f.write_str("sensor"),
            AssetKind::Robot => f.write_str("robot"),
        }
    }
}

/// Administrative state of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AssetState {
    /// Out of service (code 0).
    Disabled,
    /// In service (code 1).
    Enabled,
}

impl AssetState {
    /// Wire code.
    pub fn code(self) -> u8 {
        match self {
            AssetState::Disabled => 0,
            AssetState::Enabled => 1,
        }
    }
}

impl From<AssetState> for u8 {
    fn from(state: AssetState) -> Self {
        state.code()
    }
}

impl TryFrom<u8> for AssetState {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AssetState::Disabled),
            1 => Ok(AssetState::Enabled),
            code => Err(UnknownCode { field: "state", code }),
        }
    }
}
