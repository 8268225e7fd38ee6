//! # Registry Invoker Port
//!
//! Dispatches a call to another registry deployed in the same namespace.
//! The transport is not this crate's concern: implementations may call an
//! in-process handler, go over RPC, or replay canned responses in tests.

use serde::{Deserialize, Serialize};

/// Response of a cross-registry invocation.
///
/// Status codes follow the chaincode shim convention.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeResponse {
    /// Status code.
    pub status: i32,
    /// Error text on failure.
    pub message: String,
    /// Raw response bytes on success.
    pub payload: Vec<u8>,
}

impl InvokeResponse {
    /// Success.
    pub const OK: i32 = 200;
    /// First status treated as an error.
    pub const ERROR_THRESHOLD: i32 = 400;
    /// Generic failure.
    pub const ERROR: i32 = 500;

    /// Successful response carrying `payload`.
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Self::OK,
            message: String::new(),
            payload,
        }
    }

    /// Failed response with `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Self::ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// True when the status is below the error threshold.
    pub fn is_success(&self) -> bool {
        self.status < Self::ERROR_THRESHOLD
    }
}

/// Cross-registry dispatch.
pub trait RegistryInvoker: Send + Sync {
    /// Invoke `target` within `namespace`. `args[0]` is the function name.
    fn invoke_registry(&self, target: &str, args: &[Vec<u8>], namespace: &str) -> InvokeResponse;
}
