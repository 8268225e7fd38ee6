//! # Fleet Registry Test Suite
//!
//! Integration flows that run several registries side by side in one
//! process, wired through `LocalDispatcher` the way a peer would route
//! registry-to-registry calls.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! └── src/
//!     └── integration/
//!         ├── inventory_flow.rs   # Asset lifecycle through dispatch
//!         ├── latency_flow.rs     # Latency → inventory cross calls, windows
//!         ├── resources_flow.rs   # Host snapshots and entry-point aliases
//!         └── telemetry.rs        # Subscriber installation
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo test -p fleet-tests
//! ```

#[cfg(test)]
mod integration;
