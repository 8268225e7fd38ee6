//! # FR-02 Resources - Host Resource Registry
//!
//! Stores the latest resource snapshot of each host. Collectors post a
//! loosely typed report (numbers may arrive as strings, sections may be
//! missing); the registry normalizes it into [`ResourceStat`] before commit,
//! deriving utilisation percentages and canonicalizing the GPU list.
//!
//! The stored `id` is always the host key the caller supplied.

#![warn(clippy::all)]

pub mod domain;
pub mod handler;
pub mod ports;
pub mod service;

pub use domain::{Capacity, HostIdentity, ResourceMetrics, ResourceReport, ResourceStat};
pub use ports::ResourceApi;
pub use service::ResourceContract;
