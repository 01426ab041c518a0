//! Game phase state machine for the Impostor engine.
//!
//! Drives one local game from the menu through pool selection, setup and
//! the pass-the-device reveal, then round after round until reset.
//!
//! # Key types
//!
//! - [`SessionStateMachine`] — owns the phase and the current round
//! - [`Phase`] — the screens of the game and their allowed transitions
//! - [`GameSetup`] — clamped player and impostor counts
//! - [`RoundState`] — turn, reveal flag, secret word and roles
//! - [`SessionConfig`] — defaults and limits

mod config;
mod error;
mod machine;
mod round;
mod setup;

pub use config::{Phase, SessionConfig};
pub use error::{SessionError, ValidationError};
pub use machine::SessionStateMachine;
pub use round::{RevealCard, RoundState};
pub use setup::GameSetup;
