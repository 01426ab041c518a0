//! Error types for the words layer.

use crate::PoolKey;

/// Errors from word selection.
///
/// Both variants mean "no word for this round"; they differ in who
/// decided it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// Every word of the pool has been shown and the player declined to
    /// start the cycle over.
    #[error("words of pool {0} are used up and the reset was declined")]
    ResetDeclined(PoolKey),

    /// The pool is still exhausted after a reset. Only happens when the
    /// pool has no words at all.
    #[error("pool {0} has no words to choose from")]
    Exhausted(PoolKey),
}

/// Errors from category management.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    /// A category needs a non-blank name.
    #[error("category name must not be blank")]
    EmptyName,

    /// A new category needs at least one word.
    #[error("category must contain at least one word")]
    NoWords,

    /// No category has this id.
    #[error("category {0} not found")]
    NotFound(String),
}
