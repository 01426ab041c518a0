//! Pool keys: the identity under which a pool's history is stored.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Identifies a word pool for used-word tracking.
///
/// - A named category's key is derived from its id only, so editing the
///   category's words keeps its history.
/// - An ad hoc list's key is a digest of its content, so a different list
///   gets a fresh history while re-entering the same list picks up where
///   it left off.
///
/// Rendered as `category_<id>` or `custom_<sha256 hex>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolKey(String);

impl PoolKey {
    /// Key of a named category.
    pub fn category(id: &str) -> Self {
        Self(format!("category_{id}"))
    }

    /// Key of an ad hoc list.
    ///
    /// The digest input is the words joined with `'\n'` in order and
    /// lowercased: order matters, letter case doesn't.
    pub fn ad_hoc(words: &[String]) -> Self {
        let joined = words.join("\n").to_lowercase();
        let digest = Sha256::digest(joined.as_bytes());
        Self(format!("custom_{}", hex::encode(digest)))
    }

    /// The key as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
