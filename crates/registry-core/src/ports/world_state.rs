//! # World State Port
//!
//! The narrow interface to the externally managed key-value store. The
//! store owns durability, isolation and write-conflict detection; this crate
//! never assumes it holds a lock.

use crate::domain::{Selector, StoreError};

/// One key/value pair yielded by a cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateEntry {
    /// Record key.
    pub key: String,
    /// Stored bytes.
    pub value: Vec<u8>,
}

/// Cursor over a range scan or predicate query.
///
/// A cursor holds store resources until [`close`](Self::close) is called.
/// Callers must close it on every exit path; [`crate::query::CursorGuard`]
/// does that on drop.
pub trait StateQueryIterator: Send {
    /// True while more entries remain.
    fn has_next(&self) -> bool;

    /// Advance and return the next entry.
    fn next_entry(&mut self) -> Result<StateEntry, StoreError>;

    /// Release the cursor. Closing twice is a no-op.
    fn close(&mut self) -> Result<(), StoreError>;
}

/// Boxed cursor borrowed from a store.
pub type StateCursor<'a> = Box<dyn StateQueryIterator + 'a>;

/// World-state store abstraction.
pub trait WorldState: Send + Sync {
    /// Read the value stored under `key`.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove `key`.
    fn del_state(&self, key: &str) -> Result<(), StoreError>;

    /// Scan `[start, end)` in key order. Empty bounds are open.
    fn get_state_by_range(&self, start: &str, end: &str) -> Result<StateCursor<'_>, StoreError>;

    /// Evaluate a selector with the store's rich-query capability.
    fn get_query_result(&self, selector: &Selector) -> Result<StateCursor<'_>, StoreError>;
}
