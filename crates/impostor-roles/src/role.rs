use std::fmt;

use serde::{Deserialize, Serialize};

/// What a player is told during the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Knows the secret word.
    Civilian,
    /// Doesn't know the word and has to bluff.
    Impostor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Civilian => write!(f, "civilian"),
            Self::Impostor => write!(f, "impostor"),
        }
    }
}

/// One flag per player index; `true` marks an impostor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleVector(Vec<bool>);

impl From<Vec<bool>> for RoleVector {
    fn from(flags: Vec<bool>) -> Self {
        Self(flags)
    }
}

impl RoleVector {
    /// Number of players.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for a game with no players.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether player `index` is an impostor. Out-of-range indices are not.
    pub fn is_impostor(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// The role of player `index`, or `None` past the last player.
    pub fn role(&self, index: usize) -> Option<Role> {
        self.0.get(index).map(|&flag| role_of(flag))
    }

    /// How many impostors this round has.
    pub fn impostor_count(&self) -> usize {
        self.0.iter().filter(|&&flag| flag).count()
    }

    /// Indices of the impostors, ascending.
    pub fn impostor_indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| flag.then_some(i))
            .collect()
    }

    /// Roles in player order.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().map(|&flag| role_of(flag))
    }

    /// The raw flags.
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

fn role_of(flag: bool) -> Role {
    if flag { Role::Impostor } else { Role::Civilian }
}
