//! Durable key-value storage for the Impostor engine.
//!
//! This crate is the bottom layer of the workspace. It knows nothing about
//! words, players or rounds. It only knows how to keep named records
//! around between sessions:
//!
//! - **Stores** ([`KvStore`] trait, [`MemoryStore`], [`FileStore`]) —
//!   where the raw text of each record lives.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how typed records are
//!   turned into that text and back.
//! - **Records** ([`RecordStore`]) — typed load/save of whole records,
//!   with shape validation and fallback on load.
//! - **Errors** ([`StoreError`]) — what can go wrong underneath.
//!
//! # Architecture
//!
//! ```text
//! Words / Session layers (above)  ← load and save whole records
//!     ↕
//! RecordStore  ← validates shape, falls back to defaults
//!     ↕
//! KvStore (this crate)  ← string values by string key
//! ```
//!
//! Every value is loaded and stored as a whole on each mutation. There is
//! no partial update and no transaction: the engine assumes exactly one
//! active session per process.

mod codec;
mod error;
#[cfg(feature = "json")]
mod file;
mod record;
mod store;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::StoreError;
#[cfg(feature = "json")]
pub use file::FileStore;
pub use record::RecordStore;
pub use store::{KvStore, MemoryStore, SharedStore, shared};
