//! File-backed store: the whole key-value map lives in one JSON file.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{KvStore, StoreError};

/// A [`KvStore`] persisted as a single JSON object on disk.
///
/// The file is read once at [`open`](Self::open) and rewritten in full on
/// every `set`/`remove`. Writes go to a temp file that is synced and then
/// renamed over the target, so a crash mid-write leaves the previous
/// contents intact.
///
/// A missing file opens as an empty store. A file that can't be read or
/// parsed also opens as empty (with a warning): storage problems are
/// recovered locally and never block a game.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens (or lazily creates) the store at `path`.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] only if the parent directory can't be
    /// created. Unreadable or malformed contents are not errors.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                    operation: "create directory",
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let entries = load_entries(&path);
        tracing::debug!(path = %path.display(), keys = entries.len(), "file store opened");

        Ok(Self { path, entries })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flush(&self) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(&self.entries).map_err(StoreError::Encode)?;
        let temp_path = self.path.with_extension("json.tmp");

        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(&bytes).map_err(|e| StoreError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Io {
            operation: "rename",
            path: self.path.clone(),
            source: e,
        })?;

        tracing::trace!(path = %self.path.display(), keys = self.entries.len(), "file store flushed");
        Ok(())
    }
}

/// Reads the backing file, treating every failure as "nothing stored".
fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "store file unreadable, starting empty");
            return BTreeMap::new();
        }
    };

    if content.trim().is_empty() {
        return BTreeMap::new();
    }

    match serde_json::from_str(&content) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "store file malformed, starting empty");
            BTreeMap::new()
        }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
