//! Word pools for the Impostor engine.
//!
//! This crate decides WHICH secret word a round uses:
//!
//! 1. **Pools** — a pool is an ordered list of words from a named
//!    [`Category`] or from the ad hoc list ([`AdHocList`]). Each pool has
//!    a [`PoolKey`] that namespaces its history.
//! 2. **Tracking** — [`WordPoolTracker`] persists the set of words already
//!    shown for each pool key.
//! 3. **Selection** — [`WordSelector`] picks a random word nobody has seen
//!    yet, signals exhaustion once every word has been shown, and supports a
//!    single confirmed reset ([`ResetPrompt`]).
//!
//! # How it fits in the stack
//!
//! ```text
//! Session layer (above)  ← asks for the next word at round start
//!     ↕
//! Words layer (this crate)  ← pools, used sets, categories
//!     ↕
//! Store layer (below)  ← durable key-value records
//! ```

mod category;
mod custom;
mod defaults;
mod error;
mod parse;
mod pool;
mod selector;
mod tracker;

pub use category::{CATEGORIES_KEY, Category, CategoryManager};
pub use custom::{AD_HOC_KEY, AdHocList};
pub use defaults::default_categories;
pub use error::{CategoryError, WordError};
pub use parse::parse_words;
pub use pool::PoolKey;
pub use selector::{ResetPrompt, Selection, WordSelector};
pub use tracker::{UsedSet, WordPoolTracker};
