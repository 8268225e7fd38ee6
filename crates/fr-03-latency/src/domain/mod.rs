//! # Domain Layer

pub mod entities;

pub use entities::{
    LatencyAsset, LatencyResult, Timestamp, HOSTNAME_FIELD, RESULTS_FIELD, TIMESTAMP_FIELD,
};
