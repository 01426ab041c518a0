//! Error types for the storage layer.
//!
//! Each crate in the workspace defines its own error enum. A `StoreError`
//! always means the problem is in reading, writing or (de)serializing a
//! persisted record, never in game rules.

use std::path::PathBuf;

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Serializing a record to text failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Parsing a stored value back into a record failed.
    ///
    /// Common causes: hand-edited storage, a record written by an older
    /// version with a different shape, or a truncated write.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// A filesystem operation on the backing file failed.
    #[error("failed to {operation} {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing store rejected the operation for a non-I/O reason.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_operation_and_path() {
        let err = StoreError::Io {
            operation: "write",
            path: PathBuf::from("/tmp/impostor.json"),
            source: std::io::Error::other("disk full"),
        };
        let msg = err.to_string();
        assert!(msg.contains("write"));
        assert!(msg.contains("/tmp/impostor.json"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_decode_error_wraps_serde_message() {
        let inner = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err = StoreError::Decode(inner);
        assert!(err.to_string().starts_with("decode failed"));
    }
}
