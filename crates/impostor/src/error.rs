//! Unified error type for the Impostor engine.

use impostor_session::{SessionError, ValidationError};
use impostor_store::StoreError;
use impostor_words::{CategoryError, WordError};

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `impostor` crate, you deal with this single error type
/// instead of importing errors from each layer. The `#[from]` attribute on
/// each variant generates the `From` impls, so `?` converts layer errors
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum ImpostorError {
    /// A storage error (open, read, write, encode, decode).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No word could be drawn for the round.
    #[error(transparent)]
    Word(#[from] WordError),

    /// A category operation was rejected.
    #[error(transparent)]
    Category(#[from] CategoryError),

    /// A session operation was rejected (validation, wrong phase).
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<ValidationError> for ImpostorError {
    fn from(err: ValidationError) -> Self {
        Self::Session(err.into())
    }
}
