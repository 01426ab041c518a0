//! Error types for the session layer.

use impostor_words::{CategoryError, WordError};

use crate::Phase;

/// A game can't start with the current setup or pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Not enough players at the table.
    #[error("at least {min} players are needed, got {players}")]
    TooFewPlayers { players: usize, min: usize },

    /// The impostor count is outside `1..=max` for this table.
    #[error("impostors must be between 1 and {max}, got {impostors}")]
    ImpostorsOutOfRange { impostors: usize, max: usize },

    /// The selected pool has no words.
    #[error("the word pool is empty")]
    EmptyPool,
}

/// Errors returned by [`SessionStateMachine`](crate::SessionStateMachine).
///
/// Every error leaves the session exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The setup or pool doesn't allow starting a round.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No word could be drawn (reset declined, or nothing to draw).
    #[error(transparent)]
    Word(#[from] WordError),

    /// A category operation was rejected.
    #[error(transparent)]
    Category(#[from] CategoryError),

    /// The action isn't available in the current phase.
    #[error("cannot {action} while in {phase}")]
    InvalidTransition { phase: Phase, action: &'static str },
}
