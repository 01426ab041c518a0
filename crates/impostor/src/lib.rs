//! # Impostor
//!
//! Round engine for the Impostor party word game.
//!
//! Everyone at the table gets the same secret word except the impostors,
//! who get nothing and have to bluff. This crate is the engine behind one
//! shared device passed from hand to hand: it picks words without
//! repeating them, picks impostors, and walks the game through its phases.
//! Rendering is up to the caller.
//!
//! The engine is split in layers, each its own crate:
//!
//! | Crate | Concern |
//! |---|---|
//! | `impostor-store` | durable key-value records |
//! | `impostor-words` | pools, used-word history, categories |
//! | `impostor-roles` | weighted impostor draw |
//! | `impostor-session` | the phase state machine |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use impostor::prelude::*;
//!
//! # fn main() -> Result<(), ImpostorError> {
//! impostor::logging::init();
//!
//! let mut session = impostor::open_session("impostor.json")?;
//! session.open_categories()?;
//! session.select_category("frutas")?;
//! session.set_players(5)?;
//! session.start_game(&mut |_: &PoolKey| true)?;
//!
//! while session.phase() == Phase::Reveal {
//!     session.toggle_reveal()?;
//!     // show session.reveal_card() to the player holding the device
//!     session.next_player()?;
//! }
//! # Ok(())
//! # }
//! ```

use std::path::Path;

mod error;
pub mod logging;

pub use error::ImpostorError;
pub use impostor_roles as roles;
pub use impostor_session as session;
pub use impostor_store as store;
pub use impostor_words as words;

use impostor_session::{SessionConfig, SessionStateMachine};
use impostor_store::FileStore;

/// Opens a session persisted to the JSON file at `path`.
///
/// The file is created on first write. A missing or damaged file starts
/// the game from the built-in categories.
///
/// # Errors
/// [`ImpostorError::Store`] if the file's directory can't be created.
pub fn open_session(path: impl AsRef<Path>) -> Result<SessionStateMachine<FileStore>, ImpostorError> {
    open_session_with(path, SessionConfig::default())
}

/// Like [`open_session`], with explicit defaults and limits.
pub fn open_session_with(
    path: impl AsRef<Path>,
    config: SessionConfig,
) -> Result<SessionStateMachine<FileStore>, ImpostorError> {
    let store = FileStore::open(path.as_ref())?;
    tracing::debug!(path = %store.path().display(), "session store opened");
    Ok(SessionStateMachine::with_config(store, config))
}

pub mod prelude {
    pub use crate::ImpostorError;
    pub use impostor_roles::{FIRST_PLAYER_WEIGHT, Role, RoleAssigner, RoleVector};
    pub use impostor_session::{
        GameSetup, Phase, RevealCard, RoundState, SessionConfig, SessionError,
        SessionStateMachine, ValidationError,
    };
    pub use impostor_store::{FileStore, KvStore, MemoryStore};
    pub use impostor_words::{
        Category, CategoryError, PoolKey, ResetPrompt, Selection, WordError, WordSelector,
        parse_words,
    };
}
