//! Codec trait and implementations for turning records into stored text.
//!
//! A "codec" (coder/decoder) converts between Rust types and the string
//! values a [`KvStore`](crate::KvStore) holds. The record layer doesn't
//! care HOW a record is serialized; it just needs something that
//! implements [`Codec`].
//!
//! Currently we provide [`JsonCodec`], which keeps stored values readable
//! and compatible with records written as plain JSON arrays and objects.

use serde::{Serialize, de::DeserializeOwned};

use crate::StoreError;

/// A codec that can encode Rust types to text and decode text back.
///
/// `decode<T: DeserializeOwned>` means the result owns all of its data and
/// doesn't borrow from the input string, so the raw value can be dropped
/// right after decoding.
pub trait Codec {
    /// Serializes a value into its stored representation.
    ///
    /// # Errors
    /// Returns [`StoreError::Encode`] if the value can't be represented in
    /// this format.
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, StoreError>;

    /// Parses a stored representation back into a value.
    ///
    /// # Errors
    /// Returns [`StoreError::Decode`] if the text is malformed or doesn't
    /// match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &str) -> Result<T, StoreError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// This is behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use impostor_store::{Codec, JsonCodec};
///
/// let codec = JsonCodec;
/// let words = vec!["kiwi".to_string(), "mango".to_string()];
///
/// let text = codec.encode(&words).unwrap();
/// assert_eq!(text, r#"["kiwi","mango"]"#);
///
/// let decoded: Vec<String> = codec.decode(&text).unwrap();
/// assert_eq!(decoded, words);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, StoreError> {
        serde_json::to_string(value).map_err(StoreError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &str) -> Result<T, StoreError> {
        serde_json::from_str(data).map_err(StoreError::Decode)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_encode_string_list_is_plain_json_array() {
        let codec = JsonCodec;
        let text = codec
            .encode(&vec!["sartén".to_string(), "olla".to_string()])
            .expect("should encode");
        assert_eq!(text, r#"["sartén","olla"]"#);
    }

    #[test]
    fn test_decode_wrong_shape_returns_decode_error() {
        // Valid JSON, but an object where a list is expected.
        let codec = JsonCodec;
        let result: Result<Vec<String>, _> = codec.decode(r#"{"a": 1}"#);
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }

    #[test]
    fn test_decode_garbage_returns_decode_error() {
        let codec = JsonCodec;
        let result: Result<Vec<String>, _> = codec.decode("not json at all");
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }

    #[test]
    fn test_decode_map_record() {
        let codec = JsonCodec;
        let map: BTreeMap<String, u32> =
            codec.decode(r#"{"b": 2, "a": 1}"#).expect("should decode");
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.len(), 2);
    }
}
