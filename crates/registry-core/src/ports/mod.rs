//! # Ports Module
//!
//! Hexagonal architecture ports: the world-state store, cross-registry
//! dispatch and the wall clock are driven (outbound); contract dispatch is
//! the driving (inbound) side.

pub mod clock;
pub mod contract;
pub mod invoker;
pub mod world_state;

pub use clock::Clock;
pub use contract::{dispatch, reply, Args, ContractError, ContractHandler};
pub use invoker::{InvokeResponse, RegistryInvoker};
pub use world_state::{StateCursor, StateEntry, StateQueryIterator, WorldState};
