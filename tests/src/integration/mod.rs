//! Cross-registry integration flows.
//!
//! Every flow deploys its registries into a shared [`LocalDispatcher`] with
//! one in-memory world state per registry and a fixed clock.

mod inventory_flow;
mod latency_flow;
mod resources_flow;
mod telemetry;

use fr_01_inventory::InventoryContract;
use fr_02_resources::ResourceContract;
use fr_03_latency::LatencyContract;
use registry_core::adapters::{FixedClock, InMemoryWorldState, LocalDispatcher};
use registry_core::ports::InvokeResponse;
use std::sync::Arc;

/// Namespace every registry is deployed in.
pub const CHANNEL: &str = "mychannel";

/// Clock reading shared by all flows (seconds since the epoch).
pub const NOW: i64 = 1_700_000_000;

/// A dispatcher plus handles on each registry's world state.
pub struct Fleet {
    pub dispatcher: LocalDispatcher,
    pub clock: Arc<FixedClock>,
    pub inventory_state: Arc<InMemoryWorldState>,
    pub resources_state: Arc<InMemoryWorldState>,
    pub latency_state: Arc<InMemoryWorldState>,
}

impl Fleet {
    /// Deploy all three registries.
    pub fn deploy() -> Self {
        let fleet = Self::empty();
        fleet.deploy_inventory();
        fleet.dispatcher.deploy(
            CHANNEL,
            Arc::new(ResourceContract::default()),
            fleet.resources_state.clone(),
        );
        fleet.dispatcher.deploy(
            CHANNEL,
            Arc::new(LatencyContract::default()),
            fleet.latency_state.clone(),
        );
        fleet
    }

    /// Dispatcher with nothing deployed.
    pub fn empty() -> Self {
        let clock = Arc::new(FixedClock::new(NOW));
        Self {
            dispatcher: LocalDispatcher::new(clock.clone()),
            clock,
            inventory_state: Arc::new(InMemoryWorldState::new()),
            resources_state: Arc::new(InMemoryWorldState::new()),
            latency_state: Arc::new(InMemoryWorldState::new()),
        }
    }

    /// Deploy only the inventory registry.
    pub fn deploy_inventory(&self) {
        self.dispatcher.deploy(
            CHANNEL,
            Arc::new(InventoryContract::default()),
            self.inventory_state.clone(),
        );
    }

    /// Deploy only the latency registry.
    pub fn deploy_latency(&self) {
        self.dispatcher.deploy(
            CHANNEL,
            Arc::new(LatencyContract::default()),
            self.latency_state.clone(),
        );
    }

    pub fn inventory(&self, args: &[&str]) -> InvokeResponse {
        self.dispatcher.invoke(CHANNEL, InventoryContract::NAME, args)
    }

    pub fn resources(&self, args: &[&str]) -> InvokeResponse {
        self.dispatcher.invoke(CHANNEL, ResourceContract::NAME, args)
    }

    pub fn latency(&self, args: &[&str]) -> InvokeResponse {
        self.dispatcher.invoke(CHANNEL, LatencyContract::NAME, args)
    }
}

/// Decode a successful JSON reply, panicking with the error message otherwise.
pub fn payload<T: serde::de::DeserializeOwned>(response: &InvokeResponse) -> T {
    assert!(
        response.is_success(),
        "call failed ({}): {}",
        response.status,
        response.message
    );
    serde_json::from_slice(&response.payload).expect("reply is valid JSON")
}
