//! State of the round being played.

use impostor_roles::{Role, RoleVector};

/// What the current player sees when they look at the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCard<'a> {
    /// Card face down.
    Hidden,
    /// A civilian's card: the secret word.
    Word(&'a str),
    /// An impostor's card. No word.
    Impostor,
}

/// One round: the secret word, who the impostors are, and whose turn it is
/// to look.
///
/// Lives only in memory. Leaving the round (back to the menu, or a reset)
/// drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    turn: usize,
    revealed: bool,
    secret_word: String,
    roles: RoleVector,
}

impl RoundState {
    pub(crate) fn new(secret_word: String, roles: RoleVector) -> Self {
        Self {
            turn: 0,
            revealed: false,
            secret_word,
            roles,
        }
    }

    /// Index of the player holding the device.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Whether the current card is face up.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn roles(&self) -> &RoleVector {
        &self.roles
    }

    /// Number of players in this round.
    pub fn players(&self) -> usize {
        self.roles.len()
    }

    /// Role of the player holding the device.
    pub fn current_role(&self) -> Role {
        self.roles.role(self.turn).unwrap_or(Role::Civilian)
    }

    /// `true` once the last player holds the device.
    pub fn is_last_turn(&self) -> bool {
        self.turn + 1 >= self.players()
    }

    /// The card as the current player sees it.
    pub fn card(&self) -> RevealCard<'_> {
        if !self.revealed {
            return RevealCard::Hidden;
        }
        match self.current_role() {
            Role::Impostor => RevealCard::Impostor,
            Role::Civilian => RevealCard::Word(&self.secret_word),
        }
    }

    pub(crate) fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Hands the device on. Returns `false` (and only hides the card) when
    /// everyone has already looked.
    pub(crate) fn advance(&mut self) -> bool {
        self.revealed = false;
        if self.is_last_turn() {
            return false;
        }
        self.turn += 1;
        true
    }
}
