//! # Clock Port

/// Wall-clock source for time-windowed queries.
pub trait Clock: Send + Sync {
    /// Current time in unix seconds.
    fn now_unix(&self) -> i64;
}
