//! # Codec
//!
//! Canonical JSON encoding of records.
//!
//! Where the bytes came from decides how a decode failure is reported:
//! caller payloads fail admission (`ValidationFailed`), while bytes read
//! back from the store or received from another registry are
//! `CorruptRecord`.

use crate::domain::{DecodeError, Record, RegistryError, ValidationError};
use serde::de::DeserializeOwned;

/// Encode a record into its canonical stored form.
pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>, RegistryError> {
    serde_json::to_vec(record).map_err(|e| RegistryError::corrupt(R::KIND, e))
}

/// Decode bytes read back from the world state.
pub fn decode_stored<R: Record>(bytes: &[u8]) -> Result<R, RegistryError> {
    serde_json::from_slice(bytes).map_err(|e| RegistryError::corrupt(R::KIND, e))
}

/// Decode a caller-supplied payload into `T`.
pub fn decode_payload<T: DeserializeOwned>(
    kind: &'static str,
    payload: &str,
) -> Result<T, RegistryError> {
    serde_json::from_str(payload).map_err(|e| {
        RegistryError::validation(kind, ValidationError::Malformed(DecodeError::from(e)))
    })
}

/// Decode a JSON array received from another registry.
///
/// A `null` document is an empty list; an empty byte string is not.
pub fn decode_list<T: DeserializeOwned>(
    kind: &'static str,
    bytes: &[u8],
) -> Result<Vec<T>, RegistryError> {
    let decoded: Option<Vec<T>> =
        serde_json::from_slice(bytes).map_err(|e| RegistryError::corrupt(kind, e))?;
    Ok(decoded.unwrap_or_default())
}

/// Encode any serializable response value for an entry-point reply.
pub fn encode_response<T: serde::Serialize>(
    kind: &'static str,
    value: &T,
) -> Result<Vec<u8>, RegistryError> {
    serde_json::to_vec(value).map_err(|e| RegistryError::corrupt(kind, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Probe;

    #[test]
    fn test_stored_decode_failure_is_corrupt() {
        let err = decode_stored::<Probe>(b"{not json").unwrap_err();
        assert!(matches!(err, RegistryError::CorruptRecord { kind: "probe", .. }));
    }

    #[test]
    fn test_payload_decode_failure_is_validation() {
        let err = decode_payload::<Probe>("probe", r#"{"id":"p","weight":"heavy"}"#).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::ValidationFailed {
                source: ValidationError::Malformed(_),
                ..
            }
        ));
    }

    #[test]
    fn test_encode_is_stable() {
        let probe = Probe::new("p-1", 3);
        assert_eq!(encode(&probe).unwrap(), encode(&probe.clone()).unwrap());
        assert_eq!(decode_stored::<Probe>(&encode(&probe).unwrap()).unwrap(), probe);
    }

    #[test]
    fn test_decode_list_null_is_empty() {
        let list: Vec<Probe> = decode_list("probe", b"null").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_decode_list_empty_bytes_is_corrupt() {
        let err = decode_list::<Probe>("probe", b"").unwrap_err();
        assert!(matches!(err, RegistryError::CorruptRecord { .. }));
    }
}
