//! The ad hoc ("custom") word list.

use impostor_store::{JsonCodec, KvStore, RecordStore};

use crate::PoolKey;

/// Store key of the ad hoc list.
pub const AD_HOC_KEY: &str = "impostor_custom_words_list_v3";

/// A persisted, unnamed word list typed in for a quick game.
///
/// Stored as a plain JSON array of strings, fully overwritten on every
/// change. Its pool key is a digest of the content, so each distinct list
/// has its own used-word history.
pub struct AdHocList<S> {
    records: RecordStore<S, JsonCodec>,
    words: Vec<String>,
}

impl<S: KvStore> AdHocList<S> {
    /// Loads the list from `store`. Missing or malformed loads as empty.
    pub fn load(store: S) -> Self {
        let records = RecordStore::new(store);
        let words = records.load_or(AD_HOC_KEY, Vec::new);
        Self { records, words }
    }

    /// The words, in entry order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns `true` if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The pool key of the current content.
    pub fn pool_key(&self) -> PoolKey {
        PoolKey::ad_hoc(&self.words)
    }

    /// Replaces the whole list.
    pub fn replace(&mut self, words: Vec<String>) {
        self.words = words;
        self.persist();
    }

    /// Empties the list.
    pub fn clear(&mut self) {
        self.words.clear();
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.records.save(AD_HOC_KEY, &self.words) {
            tracing::warn!(error = %e, "failed to persist ad hoc list");
        }
    }
}
