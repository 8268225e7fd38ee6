//! # Domain Layer
//!
//! Inventory record, its closed enumerations and the kind catalog.

pub mod catalog;
pub mod entities;
pub mod value_objects;

pub use catalog::Catalog;
pub use entities::InventoryAsset;
pub use value_objects::{AssetKind, AssetState, UnknownCode};
