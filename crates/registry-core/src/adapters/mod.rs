//! # Adapters
//!
//! In-process implementations of the outbound ports. They back unit tests
//! and local multi-registry deployments; production wiring supplies its own
//! world-state and invoker.

pub mod clock;
pub mod local_dispatcher;
pub mod memory_state;
pub mod static_invoker;

pub use clock::{FixedClock, SystemClock};
pub use local_dispatcher::LocalDispatcher;
pub use memory_state::InMemoryWorldState;
pub use static_invoker::{RecordedCall, StaticInvoker};
