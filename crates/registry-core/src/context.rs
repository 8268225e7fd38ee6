//! # Transaction Context
//!
//! Everything one invocation may touch, passed explicitly into every
//! registry operation: the world-state handle, the wall clock, the
//! cross-registry invoker (when the deployment provides one) and a
//! correlation id for log lines.

use crate::domain::RegistryError;
use crate::ports::{Clock, RegistryInvoker, WorldState};
use uuid::Uuid;

/// Per-invocation handles.
#[derive(Clone, Copy)]
pub struct TransactionContext<'a> {
    state: &'a dyn WorldState,
    clock: &'a dyn Clock,
    invoker: Option<&'a dyn RegistryInvoker>,
    tx_id: &'a str,
}

impl<'a> TransactionContext<'a> {
    /// Context over `state` with no invoker and no correlation id.
    pub fn new(state: &'a dyn WorldState, clock: &'a dyn Clock) -> Self {
        Self {
            state,
            clock,
            invoker: None,
            tx_id: "",
        }
    }

    /// Attach a cross-registry invoker.
    #[must_use]
    pub fn with_invoker(mut self, invoker: &'a dyn RegistryInvoker) -> Self {
        self.invoker = Some(invoker);
        self
    }

    /// Attach a correlation id supplied by the caller.
    #[must_use]
    pub fn with_tx_id(mut self, tx_id: &'a str) -> Self {
        self.tx_id = tx_id;
        self
    }

    /// World-state handle.
    pub fn state(&self) -> &'a dyn WorldState {
        self.state
    }

    /// Wall clock.
    pub fn clock(&self) -> &'a dyn Clock {
        self.clock
    }

    /// Cross-registry invoker, if bound.
    pub fn invoker(&self, target: &str, function: &str) -> Result<&'a dyn RegistryInvoker, RegistryError> {
        self.invoker.ok_or_else(|| RegistryError::RemoteCallFailed {
            target: target.to_string(),
            function: function.to_string(),
            status: crate::ports::InvokeResponse::ERROR,
            message: "no registry invoker bound to this context".to_string(),
        })
    }

    /// Correlation id (empty when the caller did not supply one).
    pub fn tx_id(&self) -> &'a str {
        self.tx_id
    }
}

/// Generate a fresh correlation id.
pub fn new_tx_id() -> String {
    Uuid::new_v4().to_string()
}
