//! # Domain Layer
//!
//! Collector report (input) and normalized resource snapshot (stored).

pub mod entities;
pub mod lenient;
pub mod report;

pub use entities::{Capacity, HostIdentity, ResourceMetrics, ResourceStat};
pub use report::{CapacityReport, CpuReport, HostReport, ResourceReport};
