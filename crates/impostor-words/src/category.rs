//! Named categories and their persisted collection.

use impostor_store::{JsonCodec, KvStore, RecordStore};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{CategoryError, PoolKey, default_categories};

/// Store key of the category collection.
pub const CATEGORIES_KEY: &str = "impostor_categories_v3";

/// Alphabet of the random id suffix.
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 7;

/// A named word pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier. Never changes after creation, even when the name
    /// or the words do.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The pool, in entry order. Duplicates allowed.
    pub words: Vec<String>,
}

impl Category {
    /// The key under which this category's used words are tracked.
    ///
    /// Depends on the id only: editing the words keeps the history, and
    /// words that were removed simply stay as stale used entries.
    pub fn pool_key(&self) -> PoolKey {
        PoolKey::category(&self.id)
    }
}

/// The persisted category collection.
///
/// The whole collection is written back on every create, update and
/// delete. A missing or malformed collection loads as the built-in
/// defaults; an empty stored collection stays empty.
pub struct CategoryManager<S> {
    records: RecordStore<S, JsonCodec>,
    categories: Vec<Category>,
}

impl<S: KvStore> CategoryManager<S> {
    /// Loads the collection from `store`.
    pub fn load(store: S) -> Self {
        let records = RecordStore::new(store);
        let categories = records.load_or(CATEGORIES_KEY, default_categories);
        tracing::debug!(count = categories.len(), "categories loaded");
        Self {
            records,
            categories,
        }
    }

    /// All categories in creation order.
    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by id.
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Adds a category with a freshly generated id.
    ///
    /// # Errors
    /// - [`CategoryError::EmptyName`] — `name` is blank
    /// - [`CategoryError::NoWords`] — `words` is empty
    pub fn create(&mut self, name: &str, words: Vec<String>) -> Result<&Category, CategoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        if words.is_empty() {
            return Err(CategoryError::NoWords);
        }

        let id = new_category_id(&mut rand::rng(), name);
        tracing::info!(%id, words = words.len(), "category created");
        self.categories.push(Category {
            id,
            name: name.to_string(),
            words,
        });
        self.persist();

        let index = self.categories.len() - 1;
        Ok(&self.categories[index])
    }

    /// Replaces a category's name and words. The id (and so the pool key)
    /// is kept.
    ///
    /// A blank `name` keeps the current name. `words` may be empty; such a
    /// category can't start a game until words are added back.
    ///
    /// # Errors
    /// [`CategoryError::NotFound`] if no category has this id.
    pub fn update(
        &mut self,
        id: &str,
        name: &str,
        words: Vec<String>,
    ) -> Result<&Category, CategoryError> {
        let index = self.position(id)?;
        let category = &mut self.categories[index];
        let name = name.trim();
        if !name.is_empty() {
            category.name = name.to_string();
        }
        category.words = words;
        tracing::info!(%id, words = category.words.len(), "category updated");

        self.persist();
        Ok(&self.categories[index])
    }

    /// Removes a category and returns it.
    ///
    /// The category's used-word record is left in the store.
    ///
    /// # Errors
    /// [`CategoryError::NotFound`] if no category has this id.
    pub fn delete(&mut self, id: &str) -> Result<Category, CategoryError> {
        let index = self.position(id)?;
        let removed = self.categories.remove(index);
        tracing::info!(%id, "category deleted");

        self.persist();
        Ok(removed)
    }

    fn position(&self, id: &str) -> Result<usize, CategoryError> {
        self.categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CategoryError::NotFound(id.to_string()))
    }

    fn persist(&mut self) {
        if let Err(e) = self.records.save(CATEGORIES_KEY, &self.categories) {
            tracing::warn!(error = %e, "failed to persist categories");
        }
    }
}

/// Builds an id from the name: lowercased, whitespace runs turned into
/// `-`, plus a random base-36 suffix.
fn new_category_id<R: Rng>(rng: &mut R, name: &str) -> String {
    let slug = name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-");
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{slug}-{suffix}")
}

#[cfg(test)]
mod tests {
    use impostor_store::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn empty_manager() -> CategoryManager<MemoryStore> {
        let mut store = MemoryStore::new();
        store.set(CATEGORIES_KEY, "[]".into()).unwrap();
        CategoryManager::load(store)
    }

    #[test]
    fn test_load_missing_collection_uses_defaults() {
        let mgr = CategoryManager::load(MemoryStore::new());
        assert_eq!(mgr.len(), default_categories().len());
        assert!(mgr.get("frutas").is_some());
    }

    #[test]
    fn test_load_malformed_collection_uses_defaults() {
        let mut store = MemoryStore::new();
        store.set(CATEGORIES_KEY, r#"[{"id": 3}]"#.into()).unwrap();

        let mgr = CategoryManager::load(store);

        assert_eq!(mgr.list(), default_categories().as_slice());
    }

    #[test]
    fn test_load_empty_collection_stays_empty() {
        assert!(empty_manager().is_empty());
    }

    #[test]
    fn test_create_generates_slug_id() {
        let mut mgr = empty_manager();

        let created = mgr.create("  Mis Cosas  ", words(&["a"])).unwrap();

        assert_eq!(created.name, "Mis Cosas");
        assert!(created.id.starts_with("mis-cosas-"));
        assert_eq!(created.id.len(), "mis-cosas-".len() + ID_SUFFIX_LEN);
    }

    #[test]
    fn test_create_persists_whole_collection() {
        let mut mgr = empty_manager();
        mgr.create("Uno", words(&["a"])).unwrap();
        mgr.create("Dos", words(&["b"])).unwrap();

        let raw = mgr.records.store().get(CATEGORIES_KEY).unwrap().unwrap();
        let stored: Vec<Category> = serde_json::from_str(&raw).unwrap();

        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1].name, "Dos");
    }

    #[test]
    fn test_create_blank_name_rejected() {
        let mut mgr = empty_manager();
        assert_eq!(
            mgr.create("   ", words(&["a"])).unwrap_err(),
            CategoryError::EmptyName
        );
        assert!(mgr.is_empty());
    }

    #[test]
    fn test_create_without_words_rejected() {
        let mut mgr = empty_manager();
        assert_eq!(mgr.create("X", vec![]).unwrap_err(), CategoryError::NoWords);
    }

    #[test]
    fn test_update_keeps_id_and_pool_key() {
        let mut mgr = empty_manager();
        let id = mgr.create("Cosas", words(&["a", "b"])).unwrap().id.clone();
        let key_before = mgr.get(&id).unwrap().pool_key();

        let updated = mgr.update(&id, "Otras", words(&["c"])).unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Otras");
        assert_eq!(updated.words, words(&["c"]));
        assert_eq!(updated.pool_key(), key_before);
    }

    #[test]
    fn test_update_blank_name_keeps_old_name() {
        let mut mgr = empty_manager();
        let id = mgr.create("Cosas", words(&["a"])).unwrap().id.clone();

        let updated = mgr.update(&id, "  ", words(&["a", "b"])).unwrap();

        assert_eq!(updated.name, "Cosas");
    }

    #[test]
    fn test_update_unknown_id_not_found() {
        let mut mgr = empty_manager();
        assert_eq!(
            mgr.update("ghost", "x", vec![]).unwrap_err(),
            CategoryError::NotFound("ghost".into())
        );
    }

    #[test]
    fn test_delete_removes_and_persists() {
        let mut mgr = CategoryManager::load(MemoryStore::new());
        let before = mgr.len();

        let removed = mgr.delete("cocina").unwrap();

        assert_eq!(removed.name, "Cocina");
        assert_eq!(mgr.len(), before - 1);
        let raw = mgr.records.store().get(CATEGORIES_KEY).unwrap().unwrap();
        assert!(!raw.contains(r#""id":"cocina""#));
    }

    #[test]
    fn test_delete_unknown_id_not_found() {
        let mut mgr = empty_manager();
        assert!(matches!(mgr.delete("ghost"), Err(CategoryError::NotFound(_))));
    }

    #[test]
    fn test_new_category_id_suffix_is_base36() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = new_category_id(&mut rng, "Deportes  de   Invierno");

        let (slug, suffix) = id.rsplit_once('-').unwrap();
        assert_eq!(slug, "deportes-de-invierno");
        assert!(suffix.bytes().all(|b| ID_ALPHABET.contains(&b)));
    }
}
