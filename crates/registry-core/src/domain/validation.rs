//! # Validation Rules
//!
//! Building blocks for per-kind admission policies. A policy is the
//! [`Record::validate`](super::Record::validate) hook of a record type and is
//! applied identically on create and update.

use super::errors::ValidationError;

/// Reject an empty (or whitespace-only) string field.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

/// Reject an empty sequence field.
pub fn require_elements<T>(field: &'static str, values: &[T]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::EmptyCollection(field));
    }
    Ok(())
}

/// Reject a negative or non-finite numeric field.
pub fn require_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::OutOfRange(field));
    }
    Ok(())
}
