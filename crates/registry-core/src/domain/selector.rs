//! # Selectors
//!
//! Declarative record filters evaluated by the store's rich-query capability.
//!
//! The dialect is deliberately small: field equality, half-open ranges,
//! nested element match and conjunction. Fields are dotted paths into the
//! record document (`timestamp.timeSeconds`).
//!
//! Stores that speak a CouchDB-style query language consume
//! [`Selector::to_query_string`]; in-process stores call
//! [`Selector::matches`] on the decoded document.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::cmp::Ordering;

/// Structured predicate over record fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// `field == value`.
    Eq {
        /// Dotted field path.
        field: String,
        /// Expected value.
        value: Value,
    },
    /// `gte <= field < lt`; either bound may be open.
    Range {
        /// Dotted field path.
        field: String,
        /// Inclusive lower bound.
        gte: Option<Value>,
        /// Exclusive upper bound.
        lt: Option<Value>,
    },
    /// At least one element of the sequence at `field` has `key == value`.
    ElemMatch {
        /// Dotted path to a sequence field.
        field: String,
        /// Dotted path inside each element.
        key: String,
        /// Expected value.
        value: Value,
    },
    /// All inner selectors match.
    And(Vec<Selector>),
}

impl Selector {
    /// Equality on `field`.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Half-open integer range `[gte, lt)` on `field`.
    pub fn range(field: impl Into<String>, gte: i64, lt: i64) -> Self {
        Self::Range {
            field: field.into(),
            gte: Some(gte.into()),
            lt: Some(lt.into()),
        }
    }

    /// Nested element match on a sequence field.
    pub fn elem_match(
        field: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Self::ElemMatch {
            field: field.into(),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Conjunction of `self` and `other`, flattening nested `And`s.
    pub fn and(self, other: Selector) -> Self {
        let mut parts = match self {
            Self::And(parts) => parts,
            single => vec![single],
        };
        match other {
            Self::And(more) => parts.extend(more),
            single => parts.push(single),
        }
        Self::And(parts)
    }

    /// Evaluate against a decoded record document.
    pub fn matches(&self, doc: &Value) -> bool {
        match self {
            Self::Eq { field, value } => lookup(doc, field).is_some_and(|v| values_equal(v, value)),
            Self::Range { field, gte, lt } => {
                let Some(v) = lookup(doc, field) else {
                    return false;
                };
                let above = gte
                    .as_ref()
                    .map_or(true, |lo| compare(v, lo).is_some_and(Ordering::is_ge));
                let below = lt
                    .as_ref()
                    .map_or(true, |hi| compare(v, hi).is_some_and(Ordering::is_lt));
                above && below
            }
            Self::ElemMatch { field, key, value } => match lookup(doc, field) {
                Some(Value::Array(items)) => items
                    .iter()
                    .any(|item| lookup(item, key).is_some_and(|v| values_equal(v, value))),
                _ => false,
            },
            Self::And(parts) => parts.iter().all(|part| part.matches(doc)),
        }
    }

    /// Render as a Mango selector fragment.
    pub fn to_mango(&self) -> Value {
        match self {
            Self::Eq { field, value } => json!({ field.as_str(): value }),
            Self::Range { field, gte, lt } => {
                let mut bounds = Map::new();
                if let Some(lo) = gte {
                    bounds.insert("$gte".to_string(), lo.clone());
                }
                if let Some(hi) = lt {
                    bounds.insert("$lt".to_string(), hi.clone());
                }
                json!({ field.as_str(): Value::Object(bounds) })
            }
            Self::ElemMatch { field, key, value } => {
                json!({ field.as_str(): { "$elemMatch": { key.as_str(): value } } })
            }
            Self::And(parts) => {
                json!({ "$and": parts.iter().map(Selector::to_mango).collect::<Vec<_>>() })
            }
        }
    }

    /// Full query document: `{"selector": {...}}`.
    pub fn to_query_string(&self) -> String {
        json!({ "selector": self.to_mango() }).to_string()
    }
}

fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(doc, |current, segment| current.as_object()?.get(segment))
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => None,
    }
}
