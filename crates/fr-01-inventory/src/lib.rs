//! # FR-01 Inventory - Fleet Node Registry
//!
//! Keeps one record per fleet node (server, sensor or robot) and answers
//! the kind catalog that sibling registries use to enumerate the fleet.
//!
//! ## Record
//!
//! | Field | Wire | Notes |
//! |-------|------|-------|
//! | `id` | string | primary key, always the key the caller supplied |
//! | `name`, `owner` | string | |
//! | `kind` | `type`: 0 Server, 1 Sensor, 2 Robot | other codes fail decoding |
//! | `state` | 0 Disabled, 1 Enabled | other codes fail decoding |
//! | `properties` | object of strings | stored in key order |
//!
//! ## Kind Catalog
//!
//! `GetServerAssets`, `GetRobotAssets`, `GetSensorAssets` and
//! `GetSensorAndRobotAssets`, each with an `...ExceptId(excludeId)`
//! variant. Served by [`InventoryContract`], consumed through
//! [`InventoryClient`].

#![warn(clippy::all)]

pub mod client;
pub mod domain;
pub mod handler;
pub mod ports;
pub mod service;

pub use client::InventoryClient;
pub use domain::{AssetKind, AssetState, Catalog, InventoryAsset, UnknownCode};
pub use ports::InventoryApi;
pub use service::InventoryContract;
