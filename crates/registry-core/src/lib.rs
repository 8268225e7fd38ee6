//! # Registry Core - Typed Key-Value Registry Engine
//!
//! Generic engine behind every fleet registry: existence-guarded CRUD over
//! one record kind, bulk and time-windowed queries, and read-only calls into
//! sibling registries.
//!
//! ## Architecture
//!
//! | Layer | Location | Purpose |
//! |-------|----------|---------|
//! | Domain | `domain/` | `Record` capability, `Selector`, admission rules, errors |
//! | Ports | `ports/` | `WorldState`, `RegistryInvoker`, `Clock`, `ContractHandler` |
//! | Engine | `registry.rs`, `query.rs`, `cross_registry.rs` | CRUD, enumeration, remote reads |
//! | Adapters | `adapters/` | In-memory store, clocks, local dispatcher, scripted invoker |
//!
//! ## Guarantees
//!
//! | Rule | Enforcement |
//! |------|-------------|
//! | Create never overwrites | `Registry::ensure_absent` before every write |
//! | Update/delete never resurrect | `Registry::ensure_present` before every write |
//! | Failed mutation leaves the store untouched | validate and encode before the single `put_state` |
//! | Cursors are always released | `query::CursorGuard` closes on drop |
//! | Remote failures are never decoded | `CrossRegistryClient::invoke` checks status first |
//!
//! ## Usage Example
//!
//! ```ignore
//! use registry_core::prelude::*;
//!
//! let state = InMemoryWorldState::new();
//! let clock = SystemClock;
//! let ctx = TransactionContext::new(&state, &clock);
//!
//! let registry = Registry::<MyRecord>::new(RegistryConfig::from_env());
//! registry.create(&ctx, "asset-1", r#"{"name":"rack-a"}"#)?;
//! let all = QueryEngine::<MyRecord>::new().scan_all(&ctx)?;
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod codec;
pub mod config;
pub mod context;
pub mod cross_registry;
pub mod domain;
pub mod ports;
pub mod query;
pub mod registry;

#[cfg(test)]
mod test_utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use config::{RegistryConfig, TransferPolicy};
pub use context::{new_tx_id, TransactionContext};
pub use cross_registry::CrossRegistryClient;
pub use domain::{
    DecodeError, Record, RegistryError, Selector, StoreError, ValidationError,
};
pub use query::{CursorGuard, QueryEngine, TimeWindow};
pub use registry::Registry;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for registry implementations.
pub mod prelude {
    // Engine
    pub use crate::config::{RegistryConfig, TransferPolicy};
    pub use crate::context::{new_tx_id, TransactionContext};
    pub use crate::cross_registry::CrossRegistryClient;
    pub use crate::query::{QueryEngine, TimeWindow};
    pub use crate::registry::Registry;

    // Domain
    pub use crate::domain::{
        require_elements, require_non_empty, require_non_negative, DecodeError, Record,
        RegistryError, Selector, StoreError, ValidationError,
    };

    // Ports
    pub use crate::ports::{
        dispatch, reply, Args, Clock, ContractError, ContractHandler, InvokeResponse,
        RegistryInvoker, WorldState,
    };

    // Adapters
    pub use crate::adapters::{
        FixedClock, InMemoryWorldState, LocalDispatcher, StaticInvoker, SystemClock,
    };
}
