//! Impostor assignment for the Impostor engine.
//!
//! Picks which players are impostors for a round. The draw is weighted
//! sampling without replacement: every player starts with weight `1.0`
//! except the first one, who gets [`FIRST_PLAYER_WEIGHT`]. The first player
//! opens the discussion, so they are made a little less likely to hold the
//! impostor role.
//!
//! # Usage
//!
//! ```
//! use impostor_roles::{Role, RoleAssigner};
//!
//! let roles = RoleAssigner::assign(6, 2);
//! assert_eq!(roles.len(), 6);
//! assert_eq!(roles.impostor_count(), 2);
//! assert!(roles.iter().any(|role| role == Role::Impostor));
//! ```

mod assigner;
mod role;

pub use assigner::{FIRST_PLAYER_WEIGHT, RoleAssigner};
pub use role::{Role, RoleVector};
