//! # Registry
//!
//! Existence-guarded CRUD over one record kind in one key namespace.
//!
//! The store exposes no create-if-absent primitive to this layer, so every
//! mutation re-checks existence immediately before writing:
//!
//! | Operation | Precondition | Failure |
//! |-----------|--------------|---------|
//! | `create` / `insert` | key absent | `AlreadyExists` |
//! | `update` / `replace` | key present | `NotFound` |
//! | `delete` | key present | `NotFound` |
//! | `read` | key present | `NotFound`, `CorruptRecord` |
//! | `transfer` | source present, target absent | `NotFound`, `AlreadyExists` |
//!
//! Records are validated and encoded before the single write, so a failed
//! mutation never touches the store.

use crate::codec;
use crate::config::{RegistryConfig, TransferPolicy};
use crate::context::TransactionContext;
use crate::domain::{Record, RegistryError};
use std::marker::PhantomData;
use tracing::{debug, warn};

/// CRUD engine for record kind `R`.
#[derive(Clone, Debug)]
pub struct Registry<R: Record> {
    config: RegistryConfig,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Default for Registry<R> {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl<R: Record> Registry<R> {
    /// Create a registry with `config`.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            _record: PhantomData,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// True iff the store holds a non-empty value for `key`.
    pub fn exists(&self, ctx: &TransactionContext<'_>, key: &str) -> Result<bool, RegistryError> {
        let value = ctx.state().get_state(key)?;
        Ok(value.is_some_and(|bytes| !bytes.is_empty()))
    }

    /// Decode `payload`, normalize it under `key`, validate and write it.
    pub fn create(
        &self,
        ctx: &TransactionContext<'_>,
        key: &str,
        payload: &str,
    ) -> Result<R, RegistryError> {
        self.ensure_absent(ctx, key)?;
        let record = self.decode_input(key, payload)?;
        self.commit(ctx, key, &record)?;
        debug!(kind = R::KIND, key, tx_id = ctx.tx_id(), "record created");
        Ok(record)
    }

    /// Validate and write an already decoded record under its own key.
    pub fn insert(&self, ctx: &TransactionContext<'_>, record: R) -> Result<R, RegistryError> {
        Self::admit(&record)?;
        let key = record.key().to_string();
        self.ensure_absent(ctx, &key)?;
        self.commit(ctx, &key, &record)?;
        debug!(kind = R::KIND, key = %key, tx_id = ctx.tx_id(), "record created");
        Ok(record)
    }

    /// Read and decode the record under `key`.
    pub fn read(&self, ctx: &TransactionContext<'_>, key: &str) -> Result<R, RegistryError> {
        let bytes = ctx
            .state()
            .get_state(key)?
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| Self::not_found(key))?;
        codec::decode_stored(&bytes)
    }

    /// Replace the record under `key` with the decoded `payload`.
    pub fn update(
        &self,
        ctx: &TransactionContext<'_>,
        key: &str,
        payload: &str,
    ) -> Result<R, RegistryError> {
        self.ensure_present(ctx, key)?;
        let record = self.decode_input(key, payload)?;
        self.commit(ctx, key, &record)?;
        debug!(kind = R::KIND, key, tx_id = ctx.tx_id(), "record updated");
        Ok(record)
    }

    /// Replace the record stored under `record.key()`.
    pub fn replace(&self, ctx: &TransactionContext<'_>, record: R) -> Result<R, RegistryError> {
        Self::admit(&record)?;
        let key = record.key().to_string();
        self.ensure_present(ctx, &key)?;
        self.commit(ctx, &key, &record)?;
        debug!(kind = R::KIND, key = %key, tx_id = ctx.tx_id(), "record updated");
        Ok(record)
    }

    /// Remove the record under `key`.
    pub fn delete(&self, ctx: &TransactionContext<'_>, key: &str) -> Result<(), RegistryError> {
        self.ensure_present(ctx, key)?;
        ctx.state().del_state(key)?;
        debug!(kind = R::KIND, key, tx_id = ctx.tx_id(), "record deleted");
        Ok(())
    }

    /// Rewrite the record under `from` to identity `to` and store it there.
    ///
    /// The source key is kept or removed according to
    /// [`RegistryConfig::transfer_policy`].
    pub fn transfer(
        &self,
        ctx: &TransactionContext<'_>,
        from: &str,
        to: &str,
    ) -> Result<R, RegistryError> {
        let mut record = self.read(ctx, from)?;
        if from == to {
            return Ok(record);
        }
        self.ensure_absent(ctx, to)?;

        record.rekey(to);
        Self::admit(&record)?;
        self.commit(ctx, to, &record)?;

        match self.config.transfer_policy {
            TransferPolicy::RetainSource => warn!(
                kind = R::KIND,
                from,
                to,
                tx_id = ctx.tx_id(),
                "transfer retained source key; record now stored twice"
            ),
            TransferPolicy::MoveSource => {
                ctx.state().del_state(from)?;
                debug!(kind = R::KIND, from, to, tx_id = ctx.tx_id(), "record moved");
            }
        }
        Ok(record)
    }

    fn decode_input(&self, key: &str, payload: &str) -> Result<R, RegistryError> {
        let input: R::Input = codec::decode_payload(R::KIND, payload)?;
        let record =
            R::from_input(key, input).map_err(|e| RegistryError::validation(R::KIND, e))?;
        Self::admit(&record)?;
        Ok(record)
    }

    fn admit(record: &R) -> Result<(), RegistryError> {
        record
            .validate()
            .map_err(|e| RegistryError::validation(R::KIND, e))
    }

    fn commit(
        &self,
        ctx: &TransactionContext<'_>,
        key: &str,
        record: &R,
    ) -> Result<(), RegistryError> {
        let bytes = codec::encode(record)?;
        ctx.state().put_state(key, &bytes)?;
        Ok(())
    }

    fn ensure_absent(&self, ctx: &TransactionContext<'_>, key: &str) -> Result<(), RegistryError> {
        if self.exists(ctx, key)? {
            return Err(RegistryError::AlreadyExists {
                kind: R::KIND,
                key: key.to_string(),
            });
        }
        Ok(())
    }

    fn ensure_present(&self, ctx: &TransactionContext<'_>, key: &str) -> Result<(), RegistryError> {
        if !self.exists(ctx, key)? {
            return Err(Self::not_found(key));
        }
        Ok(())
    }

    fn not_found(key: &str) -> RegistryError {
        RegistryError::NotFound {
            kind: R::KIND,
            key: key.to_string(),
        }
    }
}
