use crate::domain::{Selector, StoreError};
use crate::ports::{StateCursor, StateEntry, StateQueryIterator, WorldState};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory implementation of WorldState for testing and local wiring.
///
/// Rich queries decode each value as JSON and evaluate the selector in
/// process; values that are not JSON documents never match, the way a
/// document store leaves them unindexed.
#[derive(Debug, Default)]
pub struct InMemoryWorldState {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
    open_cursors: Arc<AtomicUsize>,
    unavailable: AtomicBool,
}

impl InMemoryWorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Cursors handed out and not yet closed.
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail with a store error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError("world state unavailable".to_string()));
        }
        Ok(())
    }

    fn cursor(&self, entries: VecDeque<StateEntry>) -> StateCursor<'_> {
        Box::new(MemoryCursor::open(entries, Arc::clone(&self.open_cursors)))
    }
}

impl WorldState for InMemoryWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.check()?;
        Ok(self.entries.read().get(key).cloned())
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.check()?;
        self.entries.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn del_state(&self, key: &str) -> Result<(), StoreError> {
        self.check()?;
        self.entries.write().remove(key);
        Ok(())
    }

    fn get_state_by_range(&self, start: &str, end: &str) -> Result<StateCursor<'_>, StoreError> {
        self.check()?;
        let snapshot = self
            .entries
            .read()
            .iter()
            .filter(|(key, _)| start.is_empty() || key.as_str() >= start)
            .filter(|(key, _)| end.is_empty() || key.as_str() < end)
            .map(|(key, value)| StateEntry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();
        Ok(self.cursor(snapshot))
    }

    fn get_query_result(&self, selector: &Selector) -> Result<StateCursor<'_>, StoreError> {
        self.check()?;
        let snapshot = self
            .entries
            .read()
            .iter()
            .filter(|(_, value)| {
                serde_json::from_slice::<Value>(value)
                    .map(|doc| selector.matches(&doc))
                    .unwrap_or(false)
            })
            .map(|(key, value)| StateEntry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();
        Ok(self.cursor(snapshot))
    }
}

/// Snapshot cursor that tracks whether it was closed.
struct MemoryCursor {
    entries: VecDeque<StateEntry>,
    open_cursors: Arc<AtomicUsize>,
    closed: bool,
}

impl MemoryCursor {
    fn open(entries: VecDeque<StateEntry>, open_cursors: Arc<AtomicUsize>) -> Self {
        open_cursors.fetch_add(1, Ordering::SeqCst);
        Self {
            entries,
            open_cursors,
            closed: false,
        }
    }
}

impl StateQueryIterator for MemoryCursor {
    fn has_next(&self) -> bool {
        !self.closed && !self.entries.is_empty()
    }

    fn next_entry(&mut self) -> Result<StateEntry, StoreError> {
        if self.closed {
            return Err(StoreError("cursor already closed".to_string()));
        }
        self.entries
            .pop_front()
            .ok_or_else(|| StoreError("cursor exhausted".to_string()))
    }

    fn close(&mut self) -> Result<(), StoreError> {
        if !self.closed {
            self.closed = true;
            self.open_cursors.fetch_sub(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
