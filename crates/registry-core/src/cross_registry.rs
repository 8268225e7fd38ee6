//! # Cross-Registry Client
//!
//! Read-only passthrough to another registry deployed in the same
//! namespace. The caller names a remote function and its string arguments;
//! a success response is decoded as a JSON array of `T`, anything else is
//! surfaced as `RemoteCallFailed` without looking at the payload.

use crate::codec;
use crate::context::TransactionContext;
use crate::domain::RegistryError;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Kind label for decode failures of remote payloads.
const REMOTE_KIND: &str = "remote registry";

/// Client for one remote registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossRegistryClient {
    target: String,
    namespace: String,
}

impl CrossRegistryClient {
    /// Client for `target` deployed in `namespace`.
    pub fn new(target: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            namespace: namespace.into(),
        }
    }

    /// Remote registry name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Namespace the remote registry lives in.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Invoke `function(args...)` on the remote registry and decode the
    /// returned list.
    pub fn invoke<T: DeserializeOwned>(
        &self,
        ctx: &TransactionContext<'_>,
        function: &str,
        args: &[&str],
    ) -> Result<Vec<T>, RegistryError> {
        let invoker = ctx.invoker(&self.target, function)?;

        let mut raw = Vec::with_capacity(args.len() + 1);
        raw.push(function.as_bytes().to_vec());
        raw.extend(args.iter().map(|arg| arg.as_bytes().to_vec()));

        let response = invoker.invoke_registry(&self.target, &raw, &self.namespace);
        if !response.is_success() {
            warn!(
                target_registry = %self.target,
                function,
                status = response.status,
                message = %response.message,
                tx_id = ctx.tx_id(),
                "cross-registry call failed"
            );
            return Err(RegistryError::RemoteCallFailed {
                target: self.target.clone(),
                function: function.to_string(),
                status: response.status,
                message: response.message,
            });
        }

        let items = codec::decode_list(REMOTE_KIND, &response.payload)?;
        debug!(
            target_registry = %self.target,
            function,
            count = items.len(),
            tx_id = ctx.tx_id(),
            "cross-registry call"
        );
        Ok(items)
    }
}
