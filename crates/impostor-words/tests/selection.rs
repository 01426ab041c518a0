//! Integration tests for word selection over shared and durable stores.

use std::collections::HashSet;

use impostor_store::{FileStore, MemoryStore, shared};
use impostor_words::{
    AdHocList, CategoryManager, PoolKey, Selection, WordError, WordSelector, parse_words,
};

fn pool(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// =========================================================================
// Cycle-without-repetition
// =========================================================================

#[test]
fn test_full_cycle_then_exhausted_for_every_used_subset() {
    // For each starting used set U ⊆ P, selection draws from P \ U and
    // signals exhaustion exactly when P \ U is empty.
    let words = pool(&["a", "b", "c"]);
    for mask in 0u8..8 {
        let mut sel = WordSelector::new(MemoryStore::new());
        let key = PoolKey::category("subset");
        let used: HashSet<String> = words
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, w)| w.clone())
            .collect();
        // Pre-mark the subset by drawing from a pool of just those words.
        let used_pool: Vec<String> = used.iter().cloned().collect();
        for _ in 0..used_pool.len() {
            assert!(matches!(sel.select_next(&used_pool, &key), Selection::Word(_)));
        }

        let mut drawn = HashSet::new();
        loop {
            match sel.select_next(&words, &key) {
                Selection::Word(w) => {
                    assert!(!used.contains(&w), "drew a used word: {w}");
                    assert!(drawn.insert(w), "word repeated");
                }
                Selection::Exhausted => break,
            }
        }
        assert_eq!(drawn.len() + used.len(), words.len());
    }
}

#[test]
fn test_history_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("impostor.json");
    let words = pool(&["uno", "dos", "tres"]);
    let key = PoolKey::category("numeros");

    let first = {
        let mut sel = WordSelector::new(FileStore::open(&path).unwrap());
        match sel.select_next(&words, &key) {
            Selection::Word(w) => w,
            Selection::Exhausted => panic!("fresh pool"),
        }
    };

    let mut sel = WordSelector::new(FileStore::open(&path).unwrap());
    let mut rest = Vec::new();
    while let Selection::Word(w) = sel.select_next(&words, &key) {
        rest.push(w);
    }

    assert_eq!(rest.len(), 2);
    assert!(!rest.contains(&first));
}

#[test]
fn test_switching_pools_keeps_each_history() {
    let mut sel = WordSelector::new(MemoryStore::new());
    let fruit = pool(&["kiwi", "mango"]);
    let places = pool(&["playa", "museo"]);
    let fruit_key = PoolKey::category("frutas");
    let places_key = PoolKey::category("lugares");

    sel.select_next(&fruit, &fruit_key);
    sel.select_next(&places, &places_key);
    sel.select_next(&places, &places_key);

    assert_eq!(sel.remaining(&fruit, &fruit_key), 1);
    assert_eq!(sel.select_next(&places, &places_key), Selection::Exhausted);
}

// =========================================================================
// Shared store between components
// =========================================================================

#[test]
fn test_category_edit_keeps_used_history() {
    let store = shared(MemoryStore::new());
    let mut categories = CategoryManager::load(store.clone());
    let mut sel = WordSelector::new(store.clone());

    let id = categories
        .create("Colores", pool(&["rojo", "azul"]))
        .unwrap()
        .id
        .clone();
    let key = categories.get(&id).unwrap().pool_key();
    let drawn = match sel.select_next(&categories.get(&id).unwrap().words, &key) {
        Selection::Word(w) => w,
        Selection::Exhausted => panic!("fresh pool"),
    };

    // Add a word; the already-drawn one must still count as used.
    let mut edited = categories.get(&id).unwrap().words.clone();
    edited.push("verde".into());
    categories.update(&id, "", edited).unwrap();
    let category = categories.get(&id).unwrap();

    assert_eq!(category.pool_key(), key);
    assert_eq!(sel.remaining(&category.words, &key), 2);
    for _ in 0..2 {
        match sel.select_next(&category.words, &key) {
            Selection::Word(w) => assert_ne!(w, drawn),
            Selection::Exhausted => panic!("two words left"),
        }
    }
}

#[test]
fn test_ad_hoc_list_from_pasted_text() {
    let store = shared(MemoryStore::new());
    let mut list = AdHocList::load(store.clone());
    list.replace(parse_words("guitarra\r\n\r\n  autopista \n"));
    let mut sel = WordSelector::new(store.clone());
    let key = list.pool_key();

    let mut declined = |_: &PoolKey| false;
    assert!(sel.select_with_reset(list.words(), &key, &mut declined).is_ok());
    assert!(sel.select_with_reset(list.words(), &key, &mut declined).is_ok());
    assert_eq!(
        sel.select_with_reset(list.words(), &key, &mut declined),
        Err(WordError::ResetDeclined(key.clone()))
    );

    // Reloading from the same store sees the same list and history.
    let reloaded = AdHocList::load(store.clone());
    assert_eq!(reloaded.words(), list.words());
    assert_eq!(sel.remaining(reloaded.words(), &reloaded.pool_key()), 0);
}
