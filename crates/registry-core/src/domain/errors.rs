//! # Domain Errors
//!
//! Error taxonomy for registry operations.
//!
//! Every error is handed back to the immediate caller unmodified. Nothing in
//! this crate retries or swallows a failure; the transaction harness above
//! decides whether to abort or surface it.

use thiserror::Error;

/// Failure to decode bytes into a typed value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DecodeError(pub String);

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self(err.to_string())
    }
}

/// Admission rule violations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required string field is empty.
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// A required sequence field has no elements.
    #[error("field `{0}` must contain at least one element")]
    EmptyCollection(&'static str),

    /// A numeric field is negative or not finite.
    #[error("field `{0}` must be a finite, non-negative number")]
    OutOfRange(&'static str),

    /// The payload could not be decoded into the expected shape.
    #[error("malformed payload: {0}")]
    Malformed(#[from] DecodeError),
}

/// Failure reported by the external world-state store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Registry error taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Create on a key that is already present.
    #[error("the {kind} {key} already exists")]
    AlreadyExists {
        /// Record kind.
        kind: &'static str,
        /// Conflicting key.
        key: String,
    },

    /// Read, update or delete on an absent key.
    #[error("the {kind} {key} does not exist")]
    NotFound {
        /// Record kind.
        kind: &'static str,
        /// Missing key.
        key: String,
    },

    /// Stored or received bytes do not decode into the expected shape.
    #[error("corrupt {kind} record: {source}")]
    CorruptRecord {
        /// Record kind.
        kind: &'static str,
        /// Underlying decode failure.
        source: DecodeError,
    },

    /// Record failed a type-specific admission rule.
    #[error("{kind} rejected: {source}")]
    ValidationFailed {
        /// Record kind.
        kind: &'static str,
        /// Violated rule.
        source: ValidationError,
    },

    /// Underlying store call failed.
    #[error("failed to access world state: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// Cross-registry invocation returned a non-success status.
    #[error("failed to query registry {target} ({function}): status {status}: {message}")]
    RemoteCallFailed {
        /// Target registry name.
        target: String,
        /// Remote function name.
        function: String,
        /// Response status.
        status: i32,
        /// Response message.
        message: String,
    },
}

impl RegistryError {
    /// Shorthand for a validation failure on `kind`.
    pub fn validation(kind: &'static str, source: impl Into<ValidationError>) -> Self {
        Self::ValidationFailed {
            kind,
            source: source.into(),
        }
    }

    /// Shorthand for a decode failure of stored or received bytes.
    pub fn corrupt(kind: &'static str, source: impl Into<DecodeError>) -> Self {
        Self::CorruptRecord {
            kind,
            source: source.into(),
        }
    }

    /// Returns true for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
