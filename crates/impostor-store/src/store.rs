//! The [`KvStore`] trait and the in-memory and shared implementations.
//!
//! A store maps string keys to string values, like a browser's local
//! storage. Everything above this layer reads and writes whole records.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::StoreError;

/// A durable key-value store.
///
/// Implementations decide where values live (memory, a file, ...). Callers
/// decide what the values mean. `get` returns `Ok(None)` for a key that was
/// never written, which is different from a value that exists but can't be
/// read.
///
/// The trait has no `Send`/`Sync` bound: the engine is single-threaded and
/// one store instance is shared between components through a
/// [`SharedStore`].
pub trait KvStore {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// A store that keeps everything in a `HashMap` and never fails.
///
/// Used in tests and whenever durability isn't wanted (a throwaway
/// session). Values are lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a value exists for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SharedStore
// ---------------------------------------------------------------------------

/// One store instance shared by several components.
///
/// The word tracker, the category manager and the ad hoc list all persist
/// into the same store. Each of them holds a clone of this handle; the
/// `RefCell` is only borrowed for the duration of a single `get`/`set`.
pub type SharedStore<S> = Rc<RefCell<S>>;

/// Wraps a store so it can be handed to several components.
pub fn shared<S: KvStore>(store: S) -> SharedStore<S> {
    Rc::new(RefCell::new(store))
}

impl<S: KvStore> KvStore for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let store = self
            .try_borrow()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        store.get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let mut store = self
            .try_borrow_mut()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        store.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut store = self
            .try_borrow_mut()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        store.remove(key)
    }
}
