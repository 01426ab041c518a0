//! Session configuration and phase state machine.

use serde::{Deserialize, Serialize};
use tracing::warn;

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Defaults and limits for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Player count on a fresh session and after a reset.
    pub default_players: usize,

    /// Impostor count on a fresh session and after a reset.
    pub default_impostors: usize,

    /// Fewest players a game can start with.
    pub min_players: usize,

    /// Highest player count the setup accepts.
    pub max_players: usize,

    /// Highest impostor count regardless of table size.
    pub max_impostors: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_players: 6,
            default_impostors: 1,
            min_players: 3,
            max_players: 20,
            max_impostors: 10,
        }
    }
}

impl SessionConfig {
    /// Fix out-of-range values so the config is safe to clamp against.
    ///
    /// Called automatically by [`GameSetup::new`](crate::GameSetup::new).
    /// Rules:
    /// - `max_players` and `max_impostors` are at least 1.
    /// - `min_players` is at most `max_players`.
    /// - `default_players` lies in `1..=max_players`.
    pub fn validated(mut self) -> Self {
        if self.max_players == 0 {
            warn!("max_players is 0, using 1");
            self.max_players = 1;
        }
        if self.max_impostors == 0 {
            warn!("max_impostors is 0, using 1");
            self.max_impostors = 1;
        }
        if self.min_players > self.max_players {
            warn!(
                min = self.min_players,
                max = self.max_players,
                "min_players exceeds max_players, clamping"
            );
            self.min_players = self.max_players;
        }
        self.default_players = self.default_players.clamp(1, self.max_players);
        self
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// The screen the game is on.
///
/// ```text
///            ┌──────────── back ────────────┐
///            ▼                              │
///          Menu ──► Categories ◄──► Manage  │
///            │          │                   │
///            │          ▼                   │
///            └──► Custom ──► Players ───────┤
///                              │            │
///                          start_game       │
///                              ▼            │
///                 ┌────────► Reveal ────────┘
///            next_round        │ next_player (last turn)
///                 │            ▼
///                 └─────── Between ──► Menu (reset_all)
/// ```
///
/// - **Menu**: pick between a named category and the ad hoc list.
/// - **Categories**: choose a category, or go manage them.
/// - **Manage**: create, edit and delete categories.
/// - **Custom**: type or paste the ad hoc list.
/// - **Players**: set player and impostor counts, then start.
/// - **Reveal**: the device goes around; each player peeks at their card.
/// - **Between**: everyone has seen their card; discuss, then next round.
///
/// `reset_all` returns to `Menu` from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Menu,
    Categories,
    Manage,
    Custom,
    Players,
    Reveal,
    Between,
}

impl Phase {
    /// Returns `true` while a round is being played.
    pub fn is_in_round(self) -> bool {
        matches!(self, Self::Reveal | Self::Between)
    }

    /// Returns `true` if a user action can move from `self` to `target`.
    ///
    /// Covers the navigation graph only. Moving to `Menu` through a full
    /// reset is always allowed and not listed here.
    pub fn can_transition_to(self, target: Self) -> bool {
        use Phase::*;
        matches!(
            (self, target),
            (Menu, Categories)
                | (Menu, Custom)
                | (Categories, Menu)
                | (Categories, Manage)
                | (Categories, Players)
                | (Manage, Categories)
                | (Custom, Menu)
                | (Custom, Players)
                | (Players, Menu)
                | (Players, Categories)
                | (Players, Custom)
                | (Players, Reveal)
                | (Reveal, Reveal)
                | (Reveal, Between)
                | (Reveal, Menu)
                | (Between, Reveal)
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Menu => write!(f, "Menu"),
            Self::Categories => write!(f, "Categories"),
            Self::Manage => write!(f, "Manage"),
            Self::Custom => write!(f, "Custom"),
            Self::Players => write!(f, "Players"),
            Self::Reveal => write!(f, "Reveal"),
            Self::Between => write!(f, "Between"),
        }
    }
}
