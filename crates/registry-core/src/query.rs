//! # Query Engine
//!
//! Bulk enumeration of one record kind: full range scans, predicate
//! queries, and time-windowed predicates built on top of them.
//!
//! Every enumeration decodes all values or fails as a whole with
//! `CorruptRecord`; there is no partial-result suppression. Result order
//! follows store key order and carries no meaning.

use crate::codec;
use crate::context::TransactionContext;
use crate::domain::{Record, RegistryError, Selector, StoreError};
use crate::ports::{StateCursor, StateEntry};
use serde_json::Value;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Seconds per window minute.
const SECONDS_PER_MINUTE: i64 = 60;

// =============================================================================
// CURSOR GUARD
// =============================================================================

/// Scoped ownership of a store cursor.
///
/// The cursor is closed exactly once: explicitly through [`close`](Self::close)
/// on the success path, or on drop when an error unwinds the enumeration.
pub struct CursorGuard<'a> {
    cursor: StateCursor<'a>,
    closed: bool,
}

impl<'a> CursorGuard<'a> {
    /// Take ownership of an open cursor.
    pub fn new(cursor: StateCursor<'a>) -> Self {
        Self {
            cursor,
            closed: false,
        }
    }

    /// Close the cursor, reporting any store failure.
    pub fn close(mut self) -> Result<(), StoreError> {
        self.closed = true;
        self.cursor.close()
    }
}

impl Iterator for CursorGuard<'_> {
    type Item = Result<StateEntry, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed || !self.cursor.has_next() {
            return None;
        }
        Some(self.cursor.next_entry())
    }
}

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        if !self.closed {
            if let Err(e) = self.cursor.close() {
                warn!(error = %e, "failed to close state cursor");
            }
        }
    }
}

// =============================================================================
// TIME WINDOW
// =============================================================================

/// Trailing time window `[now - minutes, now)` over a seconds field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow<'f> {
    /// Dotted path to an integer unix-seconds field.
    pub field: &'f str,
    /// Window length in minutes.
    pub minutes: u32,
}

impl<'f> TimeWindow<'f> {
    /// Window of `minutes` over `field`.
    pub fn new(field: &'f str, minutes: u32) -> Self {
        Self { field, minutes }
    }

    /// Range selector for this window ending at `now` (exclusive).
    pub fn selector(&self, now: i64) -> Selector {
        let start = now - i64::from(self.minutes) * SECONDS_PER_MINUTE;
        Selector::range(self.field, start, now)
    }
}

// =============================================================================
// QUERY ENGINE
// =============================================================================

/// Enumeration over record kind `R`.
#[derive(Clone, Debug)]
pub struct QueryEngine<R: Record> {
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Default for QueryEngine<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> QueryEngine<R> {
    /// Create a query engine.
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }

    /// Every record in the namespace.
    pub fn scan_all(&self, ctx: &TransactionContext<'_>) -> Result<Vec<R>, RegistryError> {
        let cursor = ctx.state().get_state_by_range("", "")?;
        let records = Self::collect(cursor)?;
        debug!(kind = R::KIND, count = records.len(), tx_id = ctx.tx_id(), "range scan");
        Ok(records)
    }

    /// Records matching `selector`.
    pub fn query(
        &self,
        ctx: &TransactionContext<'_>,
        selector: &Selector,
    ) -> Result<Vec<R>, RegistryError> {
        let cursor = ctx.state().get_query_result(selector)?;
        let records = Self::collect(cursor)?;
        debug!(
            kind = R::KIND,
            count = records.len(),
            query = %selector.to_query_string(),
            tx_id = ctx.tx_id(),
            "predicate query"
        );
        Ok(records)
    }

    /// Records whose `field` falls in the trailing `minutes` window.
    ///
    /// The clock is read at call time; results are a live snapshot.
    pub fn query_by_time_window(
        &self,
        ctx: &TransactionContext<'_>,
        field: &str,
        minutes: u32,
    ) -> Result<Vec<R>, RegistryError> {
        self.query_by_time_window_where(ctx, TimeWindow::new(field, minutes), None)
    }

    /// Time-window query with an additional selector ANDed in.
    pub fn query_by_time_window_where(
        &self,
        ctx: &TransactionContext<'_>,
        window: TimeWindow<'_>,
        filter: Option<Selector>,
    ) -> Result<Vec<R>, RegistryError> {
        let range = window.selector(ctx.clock().now_unix());
        let selector = match filter {
            Some(filter) => filter.and(range),
            None => range,
        };
        self.query(ctx, &selector)
    }

    /// Records in `window` where some element of `collection` has
    /// `match_key == match_value`.
    pub fn query_by_nested_match(
        &self,
        ctx: &TransactionContext<'_>,
        collection: &str,
        match_key: &str,
        match_value: impl Into<Value>,
        window: TimeWindow<'_>,
    ) -> Result<Vec<R>, RegistryError> {
        let nested = Selector::elem_match(collection, match_key, match_value);
        self.query_by_time_window_where(ctx, window, Some(nested))
    }

    fn collect(cursor: StateCursor<'_>) -> Result<Vec<R>, RegistryError> {
        let mut guard = CursorGuard::new(cursor);
        let mut records = Vec::new();
        for entry in guard.by_ref() {
            let entry = entry?;
            records.push(codec::decode_stored::<R>(&entry.value)?);
        }
        guard.close()?;
        Ok(records)
    }
}
