//! Exhaustible word selection.
//!
//! The selector guarantees that no word repeats within a pool until every
//! word of that pool has been shown once. When that happens it signals
//! [`Selection::Exhausted`]; starting the cycle over is the caller's call,
//! made through a [`ResetPrompt`].

use std::collections::HashSet;

use impostor_store::KvStore;
use rand::Rng;

use crate::{PoolKey, UsedSet, WordError, WordPoolTracker};

/// How many times the used set may be cleared within one selection.
const MAX_RESETS: usize = 1;

/// Outcome of one selection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A word nobody has seen yet in this cycle. Already recorded as used.
    Word(String),
    /// Every word of the pool has been shown (or the pool is empty).
    Exhausted,
}

/// Asks whether an exhausted pool should start over.
///
/// This is the seam with the UI: a dialog, a CLI question, or a test
/// double. Any `FnMut(&PoolKey) -> bool` closure implements it.
pub trait ResetPrompt {
    /// Returns `true` to clear the pool's used words and draw again.
    fn confirm_reset(&mut self, pool: &PoolKey) -> bool;
}

impl<F> ResetPrompt for F
where
    F: FnMut(&PoolKey) -> bool,
{
    fn confirm_reset(&mut self, pool: &PoolKey) -> bool {
        self(pool)
    }
}

/// Picks random unused words from a pool, persisting each pick.
pub struct WordSelector<S> {
    tracker: WordPoolTracker<S>,
}

impl<S: KvStore> WordSelector<S> {
    /// Creates a selector whose used sets live in `store`.
    pub fn new(store: S) -> Self {
        Self {
            tracker: WordPoolTracker::new(store),
        }
    }

    /// Returns the underlying tracker.
    pub fn tracker(&self) -> &WordPoolTracker<S> {
        &self.tracker
    }

    /// Picks a word with the thread RNG. See [`select_next_with`](Self::select_next_with).
    pub fn select_next(&mut self, pool: &[String], key: &PoolKey) -> Selection {
        self.select_next_with(&mut rand::rng(), pool, key)
    }

    /// Picks a uniformly random word of `pool` that isn't in the pool's
    /// used set, adds it to the set and persists the set before returning.
    ///
    /// Words are compared by exact string equality. A word listed twice in
    /// the pool counts once.
    pub fn select_next_with<R: Rng>(
        &mut self,
        rng: &mut R,
        pool: &[String],
        key: &PoolKey,
    ) -> Selection {
        let mut used = self.tracker.load(key);
        let available = available_words(pool, &used);

        if available.is_empty() {
            tracing::debug!(pool = %key, size = pool.len(), "pool exhausted");
            return Selection::Exhausted;
        }

        let word = available[rng.random_range(0..available.len())].clone();
        used.insert(word.clone());

        if let Err(e) = self.tracker.save(key, &used) {
            tracing::warn!(pool = %key, error = %e, "failed to persist used words");
        }

        tracing::info!(pool = %key, remaining = available.len() - 1, "word selected");
        Selection::Word(word)
    }

    /// Picks a word, offering one reset if the pool is exhausted.
    ///
    /// At most one reset happens per call: if the pool is still exhausted
    /// after clearing (an empty pool), the call gives up instead of asking
    /// again.
    ///
    /// # Errors
    /// - [`WordError::ResetDeclined`] — exhausted and `prompt` said no
    /// - [`WordError::Exhausted`] — exhausted again after the reset
    pub fn select_with_reset<P>(
        &mut self,
        pool: &[String],
        key: &PoolKey,
        prompt: &mut P,
    ) -> Result<String, WordError>
    where
        P: ResetPrompt + ?Sized,
    {
        for attempt in 0..=MAX_RESETS {
            if let Selection::Word(word) = self.select_next(pool, key) {
                return Ok(word);
            }
            if attempt == MAX_RESETS {
                break;
            }
            if !prompt.confirm_reset(key) {
                tracing::info!(pool = %key, "reset declined");
                return Err(WordError::ResetDeclined(key.clone()));
            }
            self.reset(key);
        }

        tracing::warn!(pool = %key, "pool still exhausted after reset");
        Err(WordError::Exhausted(key.clone()))
    }

    /// Clears the used set of `key`.
    ///
    /// A failed write is logged and otherwise ignored; the next selection
    /// then simply sees the old set.
    pub fn reset(&mut self, key: &PoolKey) {
        if let Err(e) = self.tracker.clear(key) {
            tracing::warn!(pool = %key, error = %e, "failed to clear used words");
        }
    }

    /// Number of distinct words of `pool` not yet shown.
    pub fn remaining(&self, pool: &[String], key: &PoolKey) -> usize {
        available_words(pool, &self.tracker.load(key)).len()
    }
}

/// `pool \ used`, deduplicated, in pool order.
fn available_words<'a>(pool: &'a [String], used: &UsedSet) -> Vec<&'a String> {
    let mut seen = HashSet::new();
    pool.iter()
        .filter(|word| !used.contains(word.as_str()))
        .filter(|word| seen.insert(word.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use impostor_store::MemoryStore;

    use super::*;

    fn pool(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn selector() -> WordSelector<MemoryStore> {
        WordSelector::new(MemoryStore::new())
    }

    #[test]
    fn test_select_next_returns_word_from_pool() {
        let mut sel = selector();
        let words = pool(&["a", "b", "c"]);
        let key = PoolKey::ad_hoc(&words);

        match sel.select_next(&words, &key) {
            Selection::Word(w) => assert!(words.contains(&w)),
            Selection::Exhausted => panic!("fresh pool should not be exhausted"),
        }
    }

    #[test]
    fn test_select_next_persists_pick_before_returning() {
        let mut sel = selector();
        let words = pool(&["only"]);
        let key = PoolKey::category("one");

        assert_eq!(sel.select_next(&words, &key), Selection::Word("only".into()));
        assert!(sel.tracker().load(&key).contains("only"));
    }

    #[test]
    fn test_select_next_empty_pool_is_exhausted() {
        let mut sel = selector();
        let key = PoolKey::ad_hoc(&[]);
        assert_eq!(sel.select_next(&[], &key), Selection::Exhausted);
    }

    #[test]
    fn test_select_next_never_repeats_before_exhaustion() {
        let mut sel = selector();
        let words = pool(&["a", "b", "c", "d", "e"]);
        let key = PoolKey::category("cycle");
        let mut seen = HashSet::new();

        for _ in 0..words.len() {
            match sel.select_next(&words, &key) {
                Selection::Word(w) => assert!(seen.insert(w), "word repeated"),
                Selection::Exhausted => panic!("exhausted too early"),
            }
        }

        assert_eq!(sel.select_next(&words, &key), Selection::Exhausted);
        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn test_select_next_duplicate_words_count_once() {
        let mut sel = selector();
        let words = pool(&["x", "x", "x"]);
        let key = PoolKey::category("dups");

        assert_eq!(sel.select_next(&words, &key), Selection::Word("x".into()));
        assert_eq!(sel.select_next(&words, &key), Selection::Exhausted);
    }

    #[test]
    fn test_select_next_ignores_stale_used_entries() {
        // Used set mentions a word the pool no longer has.
        let mut store = MemoryStore::new();
        store
            .set("impostor_used_category_edit", r#"["gone","a"]"#.into())
            .unwrap();
        let mut sel = WordSelector::new(store);
        let words = pool(&["a", "b"]);

        assert_eq!(
            sel.select_next(&words, &PoolKey::category("edit")),
            Selection::Word("b".into())
        );
    }

    #[test]
    fn test_select_with_reset_declined_leaves_used_set() {
        let mut sel = selector();
        let words = pool(&["a"]);
        let key = PoolKey::category("k");
        sel.select_next(&words, &key);

        let mut asked = 0;
        let result = sel.select_with_reset(&words, &key, &mut |_: &PoolKey| {
            asked += 1;
            false
        });

        assert_eq!(result, Err(WordError::ResetDeclined(key.clone())));
        assert_eq!(asked, 1);
        assert!(sel.tracker().load(&key).contains("a"));
    }

    #[test]
    fn test_select_with_reset_accepted_draws_again() {
        let mut sel = selector();
        let words = pool(&["a"]);
        let key = PoolKey::category("k");
        sel.select_next(&words, &key);

        let result = sel.select_with_reset(&words, &key, &mut |_: &PoolKey| true);

        assert_eq!(result, Ok("a".to_string()));
    }

    #[test]
    fn test_select_with_reset_empty_pool_asks_once_then_aborts() {
        let mut sel = selector();
        let key = PoolKey::ad_hoc(&[]);

        let mut asked = 0;
        let result = sel.select_with_reset(&[], &key, &mut |_: &PoolKey| {
            asked += 1;
            true
        });

        assert_eq!(result, Err(WordError::Exhausted(key)));
        assert_eq!(asked, 1, "must not prompt a second time");
    }

    #[test]
    fn test_select_with_reset_does_not_prompt_when_words_remain() {
        let mut sel = selector();
        let words = pool(&["a", "b"]);
        let key = PoolKey::category("k");

        let result = sel.select_with_reset(&words, &key, &mut |_: &PoolKey| -> bool {
            panic!("prompted with words left")
        });

        assert!(result.is_ok());
    }

    #[test]
    fn test_remaining_counts_distinct_unused_words() {
        let mut sel = selector();
        let words = pool(&["a", "b", "b", "c"]);
        let key = PoolKey::category("r");
        assert_eq!(sel.remaining(&words, &key), 3);

        sel.select_next(&words, &key);

        assert_eq!(sel.remaining(&words, &key), 2);
    }
}
