//! # Record Capability
//!
//! The capability set a record type provides so that one generic registry
//! can serve every kind: a primary-key accessor, an identity rewrite, input
//! normalization and a per-kind admission policy. Encoding and decoding come
//! from the serde bounds and are applied by [`crate::codec`].

use super::errors::ValidationError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A record kind stored by a [`crate::Registry`].
pub trait Record: Serialize + DeserializeOwned + Clone + Debug + Send + Sync {
    /// Human-readable kind name used in errors and logs.
    const KIND: &'static str;

    /// Shape of the caller-supplied payload for create/update.
    ///
    /// Most kinds accept their own stored shape; kinds with a loosely typed
    /// ingestion format normalize it in [`Record::from_input`].
    type Input: DeserializeOwned;

    /// Build the canonical record stored under `key` from a decoded payload.
    fn from_input(key: &str, input: Self::Input) -> Result<Self, ValidationError>;

    /// Primary key of this record.
    fn key(&self) -> &str;

    /// Rewrite the identity field to `key`.
    fn rekey(&mut self, key: &str);

    /// Admission policy run before every create and update.
    fn validate(&self) -> Result<(), ValidationError> {
        super::validation::require_non_empty("id", self.key())
    }
}
