//! # Domain Module
//!
//! Record capability, selectors, admission rules and the error taxonomy.

pub mod errors;
pub mod record;
pub mod selector;
pub mod validation;

pub use errors::*;
pub use record::Record;
pub use selector::Selector;
pub use validation::{require_elements, require_non_empty, require_non_negative};
