//! Typed, whole-record access on top of a [`KvStore`].
//!
//! Persisted records are loosely typed: anything could be sitting under a
//! key (an older format, a hand edit, a truncated write). `RecordStore`
//! validates the shape on load by decoding into the expected type, and
//! [`load_or`](RecordStore::load_or) substitutes a fallback instead of
//! propagating the failure.

use serde::{Serialize, de::DeserializeOwned};

#[cfg(feature = "json")]
use crate::JsonCodec;
use crate::{Codec, KvStore, StoreError};

/// Typed record access over a store and a codec.
#[derive(Debug, Clone)]
pub struct RecordStore<S, C> {
    store: S,
    codec: C,
}

#[cfg(feature = "json")]
impl<S: KvStore> RecordStore<S, JsonCodec> {
    /// Creates a record store that encodes records as JSON.
    pub fn new(store: S) -> Self {
        Self::with_codec(store, JsonCodec)
    }
}

impl<S: KvStore, C: Codec> RecordStore<S, C> {
    /// Creates a record store with an explicit codec.
    pub fn with_codec(store: S, codec: C) -> Self {
        Self { store, codec }
    }

    /// Loads and decodes the record under `key`.
    ///
    /// Returns `Ok(None)` if nothing was ever stored there.
    ///
    /// # Errors
    /// Propagates store failures and [`StoreError::Decode`] for a value of
    /// the wrong shape.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key)? {
            Some(raw) => self.codec.decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Loads the record under `key`, substituting `fallback()` when it is
    /// missing, unreadable or malformed.
    ///
    /// Failures are logged at `warn` and never returned: a broken record
    /// must not stop a game.
    pub fn load_or<T, F>(&self, key: &str, fallback: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback(),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable record");
                fallback()
            }
        }
    }

    /// Encodes `value` and stores it under `key`, replacing the old record.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = self.codec.encode(value)?;
        self.store.set(key, raw)
    }

    /// Deletes the record under `key`.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.store.remove(key)
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
