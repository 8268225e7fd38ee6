//! Numeric fields that collectors send either as JSON numbers or as
//! numeric strings. An empty string reads as zero.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Finite floating-point value.
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n,
        NumberOrText::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                text.parse::<f64>().map_err(de::Error::custom)?
            }
        }
    };
    if !value.is_finite() {
        return Err(de::Error::custom(format!("non-finite number {value}")));
    }
    Ok(value)
}

/// Non-negative whole number.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = number(deserializer)?;
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!("expected a whole count, got {value}")));
    }
    // Range and integrality checked above.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as u32)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerOrText {
    Integer(i64),
    Text(String),
}

/// Optional unix timestamp in seconds. `null` and the empty string read as
/// absent.
pub fn timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<IntegerOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntegerOrText::Integer(secs)) => Ok(Some(secs)),
        Some(IntegerOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<i64>().map(Some).map_err(de::Error::custom)
        }
    }
}
