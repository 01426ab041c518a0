//! The used-word tracker: which words each pool has already shown.
//!
//! One record per pool key, stored under `impostor_used_<pool key>` as a
//! JSON array of strings. The record is read and written as a whole.
//!
//! The used set is NOT checked against the pool on load. A pool that
//! shrank (words removed from a category) leaves stale entries behind;
//! they are harmless because selection only looks at words that are in
//! the pool.

use std::collections::BTreeSet;

use impostor_store::{JsonCodec, KvStore, RecordStore, StoreError};

use crate::PoolKey;

/// The set of words already shown for one pool.
///
/// A `BTreeSet` so the persisted array comes out in a stable order.
pub type UsedSet = BTreeSet<String>;

/// Durable per-pool used-word sets.
pub struct WordPoolTracker<S> {
    records: RecordStore<S, JsonCodec>,
}

impl<S: KvStore> WordPoolTracker<S> {
    /// Creates a tracker persisting into `store`.
    pub fn new(store: S) -> Self {
        Self {
            records: RecordStore::new(store),
        }
    }

    /// Returns the store key for a pool's used set.
    pub fn storage_key(key: &PoolKey) -> String {
        format!("impostor_used_{key}")
    }

    /// Loads the used set for `key`.
    ///
    /// A missing or malformed record loads as an empty set.
    pub fn load(&self, key: &PoolKey) -> UsedSet {
        self.records.load_or(&Self::storage_key(key), UsedSet::new)
    }

    /// Replaces the stored used set for `key`.
    pub fn save(&mut self, key: &PoolKey, used: &UsedSet) -> Result<(), StoreError> {
        self.records.save(&Self::storage_key(key), used)
    }

    /// Empties the used set for `key`, starting the pool's cycle over.
    pub fn clear(&mut self, key: &PoolKey) -> Result<(), StoreError> {
        tracing::info!(pool = %key, "used words cleared");
        self.save(key, &UsedSet::new())
    }
}
