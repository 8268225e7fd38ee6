//! # FR-03 Latency - Probe Results Registry
//!
//! Stores latency probe rounds and answers trailing-window questions about
//! them: which rounds a given source ran recently, and which recent rounds
//! measured a given target. It also republishes the inventory kind catalog
//! so probe schedulers can enumerate the fleet from one registry.
//!
//! ## Entry Points
//!
//! | Function | Backed by |
//! |----------|-----------|
//! | `CreateAsset(json)` / `UpdateAsset(json)` | `Registry::insert` / `Registry::replace` (key from payload) |
//! | `ReadAsset`, `DeleteAsset`, `AssetExists` | `Registry` |
//! | `GetAllAssets` | `QueryEngine::scan_all` |
//! | `GetAssetListTimeSource(source, minutes)` | `source` equality AND window on `timestamp.timeSeconds` |
//! | `GetAssetListTimeTarget(target, minutes)` | some `results[].hostname` equals target AND window |
//! | `Get*Assets[ExceptId]` | [`fr_01_inventory::InventoryClient`] |
//!
//! ## Admission
//!
//! A round must carry at least one result and a non-empty `id`.

#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod handler;
pub mod ports;
pub mod service;

pub use config::LatencyConfig;
pub use domain::{LatencyAsset, LatencyResult, Timestamp};
pub use ports::LatencyApi;
pub use service::LatencyContract;
