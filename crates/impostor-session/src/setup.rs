//! Player and impostor counts for the next round.

use crate::{SessionConfig, ValidationError};

/// The table setup, kept inside its limits at every step.
///
/// Inputs are clamped rather than rejected: players to
/// `1..=max_players`, impostors to `1..=max_impostors_for(players)`.
/// Player counts below `min_players` are still representable so that
/// starting a game can refuse them with a clear reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    config: SessionConfig,
    players: usize,
    impostors: usize,
}

impl GameSetup {
    /// A setup at the config's defaults.
    pub fn new(config: SessionConfig) -> Self {
        let config = config.validated();
        let mut setup = Self {
            players: config.default_players,
            impostors: config.default_impostors,
            config,
        };
        setup.clamp_impostors();
        setup
    }

    pub fn players(&self) -> usize {
        self.players
    }

    pub fn impostors(&self) -> usize {
        self.impostors
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Largest impostor count allowed for the current table: half the
    /// players rounded down, kept within `1..=config.max_impostors`.
    pub fn max_impostors(&self) -> usize {
        self.max_impostors_for(self.players)
    }

    /// Sets the player count and re-clamps the impostor count.
    pub fn set_players(&mut self, players: usize) {
        self.players = players.clamp(1, self.config.max_players);
        self.clamp_impostors();
    }

    /// Sets the impostor count, clamped to the current table.
    pub fn set_impostors(&mut self, impostors: usize) {
        self.impostors = impostors.clamp(1, self.max_impostors());
    }

    /// Back to the config's defaults.
    pub fn reset(&mut self) {
        self.players = self.config.default_players;
        self.impostors = self.config.default_impostors;
        self.clamp_impostors();
    }

    /// Checks the counts can start a game.
    ///
    /// # Errors
    /// - [`ValidationError::TooFewPlayers`] — below `min_players`
    /// - [`ValidationError::ImpostorsOutOfRange`] — zero impostors, or
    ///   more than [`max_impostors`](Self::max_impostors), which also
    ///   rules out `impostors >= players`
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.players < self.config.min_players {
            return Err(ValidationError::TooFewPlayers {
                players: self.players,
                min: self.config.min_players,
            });
        }
        let max = self.max_impostors().min(self.players.saturating_sub(1));
        if self.impostors < 1 || self.impostors > max {
            return Err(ValidationError::ImpostorsOutOfRange {
                impostors: self.impostors,
                max,
            });
        }
        Ok(())
    }

    fn max_impostors_for(&self, players: usize) -> usize {
        (players / 2).clamp(1, self.config.max_impostors)
    }

    fn clamp_impostors(&mut self) {
        self.impostors = self.impostors.clamp(1, self.max_impostors());
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
