//! The session state machine.
//!
//! [`SessionStateMachine`] is the single owner of everything a local game
//! needs between screens: the current [`Phase`], the selected pool, the
//! table setup and the round in progress. It wires the word and role
//! layers together at the two points where a round begins (`start_game`
//! and `next_round`).
//!
//! # Shared store
//!
//! Categories, the ad hoc list and the used-word history all live in ONE
//! key-value store. The machine wraps the store in a
//! [`SharedStore`](impostor_store::SharedStore) and hands a clone of the
//! handle to each component, so they read and write the same records
//! without knowing about each other.
//!
//! # Errors leave state untouched
//!
//! Every operation checks the phase and validates its input BEFORE changing
//! anything. On `Err` the phase, setup, selection and round are exactly
//! what they were before the call. A failed store write is not an error:
//! it is logged and the game goes on with the in-memory state.

use impostor_roles::RoleAssigner;
use impostor_store::{KvStore, SharedStore, shared};
use impostor_words::{
    AdHocList, Category, CategoryError, CategoryManager, PoolKey, ResetPrompt, WordSelector,
};
use tracing::{debug, info};

use crate::{
    GameSetup, Phase, RevealCard, RoundState, SessionConfig, SessionError, ValidationError,
};

/// Drives one local game through its phases.
///
/// # Example
///
/// ```
/// use impostor_session::{Phase, SessionStateMachine};
/// use impostor_store::MemoryStore;
/// use impostor_words::PoolKey;
///
/// let mut session = SessionStateMachine::new(MemoryStore::new());
/// session.open_custom()?;
/// session.confirm_custom(vec!["faro".into(), "muelle".into()])?;
/// session.set_players(4)?;
/// session.start_game(&mut |_: &PoolKey| false)?;
///
/// assert_eq!(session.phase(), Phase::Reveal);
/// # Ok::<(), impostor_session::SessionError>(())
/// ```
pub struct SessionStateMachine<S> {
    store: SharedStore<S>,
    phase: Phase,
    setup: GameSetup,
    categories: CategoryManager<SharedStore<S>>,
    ad_hoc: AdHocList<SharedStore<S>>,
    selector: WordSelector<SharedStore<S>>,
    /// Category chosen as the pool. `None` means the ad hoc list.
    selected: Option<String>,
    round: Option<RoundState>,
}

impl<S: KvStore> SessionStateMachine<S> {
    /// Opens a session on `store` with the default config.
    pub fn new(store: S) -> Self {
        Self::with_config(store, SessionConfig::default())
    }

    /// Opens a session on `store`, loading categories and the ad hoc list.
    pub fn with_config(store: S, config: SessionConfig) -> Self {
        let store = shared(store);
        let categories = CategoryManager::load(store.clone());
        let ad_hoc = AdHocList::load(store.clone());
        let selector = WordSelector::new(store.clone());
        info!(
            categories = categories.len(),
            ad_hoc_words = ad_hoc.words().len(),
            "session opened"
        );

        Self {
            store,
            phase: Phase::Menu,
            setup: GameSetup::new(config),
            categories,
            ad_hoc,
            selector,
            selected: None,
            round: None,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    /// The round in progress, if any.
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// The current player's card, if a round is in progress.
    pub fn reveal_card(&self) -> Option<RevealCard<'_>> {
        self.round.as_ref().map(RoundState::card)
    }

    /// All categories, in creation order.
    pub fn categories(&self) -> &[Category] {
        self.categories.list()
    }

    /// The category chosen as the pool, if any.
    pub fn selected_category(&self) -> Option<&Category> {
        self.selected.as_deref().and_then(|id| self.categories.get(id))
    }

    /// The saved ad hoc list.
    pub fn ad_hoc_words(&self) -> &[String] {
        self.ad_hoc.words()
    }

    /// Words the next round draws from: the selected category's, or the
    /// ad hoc list when no category is selected.
    pub fn pool(&self) -> &[String] {
        match self.selected_category() {
            Some(category) => &category.words,
            None => self.ad_hoc.words(),
        }
    }

    /// Key of the pool's used-word history.
    pub fn pool_key(&self) -> PoolKey {
        match self.selected_category() {
            Some(category) => category.pool_key(),
            None => self.ad_hoc.pool_key(),
        }
    }

    /// Words of the pool not shown yet in this cycle.
    pub fn remaining_words(&self) -> usize {
        self.selector.remaining(self.pool(), &self.pool_key())
    }

    /// The shared store handle.
    pub fn store(&self) -> &SharedStore<S> {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// `Menu → Categories`.
    pub fn open_categories(&mut self) -> Result<(), SessionError> {
        self.ensure("open categories", Phase::Menu)?;
        self.enter(Phase::Categories);
        Ok(())
    }

    /// `Menu → Custom`.
    pub fn open_custom(&mut self) -> Result<(), SessionError> {
        self.ensure("open the custom list", Phase::Menu)?;
        self.enter(Phase::Custom);
        Ok(())
    }

    /// `Categories → Manage`.
    pub fn manage_categories(&mut self) -> Result<(), SessionError> {
        self.ensure("manage categories", Phase::Categories)?;
        self.enter(Phase::Manage);
        Ok(())
    }

    /// One step back.
    ///
    /// `Manage` goes back to `Categories`; `Categories`, `Custom`, `Players`
    /// and `Reveal` go back to `Menu`. Leaving `Reveal` abandons the round
    /// but keeps the setup and the pool selection. `Between` has no back
    /// step; use [`reset_all`](Self::reset_all).
    pub fn back(&mut self) -> Result<(), SessionError> {
        let target = match self.phase {
            Phase::Manage => Phase::Categories,
            Phase::Categories | Phase::Custom | Phase::Players | Phase::Reveal => Phase::Menu,
            Phase::Menu | Phase::Between => return Err(self.invalid("go back")),
        };
        if self.round.take().is_some() {
            info!("round abandoned");
        }
        self.enter(target);
        Ok(())
    }

    /// `Categories → Players` with category `id` as the pool.
    pub fn select_category(&mut self, id: &str) -> Result<(), SessionError> {
        self.ensure("select a category", Phase::Categories)?;
        if self.categories.get(id).is_none() {
            return Err(CategoryError::NotFound(id.to_string()).into());
        }
        self.selected = Some(id.to_string());
        debug!(%id, "category selected");
        self.enter(Phase::Players);
        Ok(())
    }

    /// `Custom → Players`: saves `words` as the ad hoc list and makes it the
    /// pool.
    ///
    /// An empty list is accepted here; starting the game rejects it.
    pub fn confirm_custom(&mut self, words: Vec<String>) -> Result<(), SessionError> {
        self.ensure("confirm the custom list", Phase::Custom)?;
        self.ad_hoc.replace(words);
        self.selected = None;
        debug!(words = self.ad_hoc.words().len(), "custom list confirmed");
        self.enter(Phase::Players);
        Ok(())
    }

    /// `Players → Categories` or `Players → Custom`, back to where the pool
    /// was chosen.
    pub fn change_pool(&mut self) -> Result<(), SessionError> {
        self.ensure("change the pool", Phase::Players)?;
        let target = if self.selected_category().is_some() {
            Phase::Categories
        } else {
            Phase::Custom
        };
        self.enter(target);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Category management
    // -----------------------------------------------------------------------

    /// Creates a category. Only in `Manage`.
    pub fn create_category(
        &mut self,
        name: &str,
        words: Vec<String>,
    ) -> Result<&Category, SessionError> {
        self.ensure("create a category", Phase::Manage)?;
        Ok(self.categories.create(name, words)?)
    }

    /// Renames and re-words a category. Only in `Manage`.
    ///
    /// The category keeps its used-word history.
    pub fn update_category(
        &mut self,
        id: &str,
        name: &str,
        words: Vec<String>,
    ) -> Result<&Category, SessionError> {
        self.ensure("edit a category", Phase::Manage)?;
        Ok(self.categories.update(id, name, words)?)
    }

    /// Deletes a category. Only in `Manage`.
    ///
    /// If it was the selected pool the selection is cleared.
    pub fn delete_category(&mut self, id: &str) -> Result<Category, SessionError> {
        self.ensure("delete a category", Phase::Manage)?;
        let removed = self.categories.delete(id)?;
        if self.selected.as_deref() == Some(id) {
            debug!(%id, "selected category deleted, selection cleared");
            self.selected = None;
        }
        Ok(removed)
    }

    /// Saves a typed list as a new named category without leaving `Custom`.
    pub fn save_custom_as_category(
        &mut self,
        name: &str,
        words: Vec<String>,
    ) -> Result<&Category, SessionError> {
        self.ensure("save the list as a category", Phase::Custom)?;
        Ok(self.categories.create(name, words)?)
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Sets the player count (clamped). Only in `Players`.
    pub fn set_players(&mut self, players: usize) -> Result<(), SessionError> {
        self.ensure("change the player count", Phase::Players)?;
        self.setup.set_players(players);
        Ok(())
    }

    /// Sets the impostor count (clamped). Only in `Players`.
    pub fn set_impostors(&mut self, impostors: usize) -> Result<(), SessionError> {
        self.ensure("change the impostor count", Phase::Players)?;
        self.setup.set_impostors(impostors);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Rounds
    // -----------------------------------------------------------------------

    /// `Players → Reveal`: validates the setup, draws a word and assigns
    /// roles.
    ///
    /// If the pool is used up, `prompt` is asked whether to start the cycle
    /// over.
    ///
    /// # Errors
    /// - [`SessionError::Validation`] — too few players, impostor count out
    ///   of range, or an empty pool
    /// - [`SessionError::Word`] — the reset was declined
    pub fn start_game<P>(&mut self, prompt: &mut P) -> Result<(), SessionError>
    where
        P: ResetPrompt + ?Sized,
    {
        self.ensure("start the game", Phase::Players)?;
        self.begin_round(prompt)?;
        self.enter(Phase::Reveal);
        Ok(())
    }

    /// Flips the current player's card. Only in `Reveal`.
    pub fn toggle_reveal(&mut self) -> Result<(), SessionError> {
        self.ensure("reveal a card", Phase::Reveal)?;
        let round = self.round_mut("reveal a card")?;
        round.toggle_reveal();
        Ok(())
    }

    /// Hands the device to the next player, hiding the card.
    ///
    /// On the last player's turn this ends the reveal: `Reveal → Between`.
    pub fn next_player(&mut self) -> Result<(), SessionError> {
        self.ensure("pass to the next player", Phase::Reveal)?;
        let round = self.round_mut("pass to the next player")?;
        if round.advance() {
            debug!(turn = round.turn(), "next player");
        } else {
            self.enter(Phase::Between);
        }
        Ok(())
    }

    /// `Between → Reveal`: a new word and new roles with the same setup.
    ///
    /// Same errors as [`start_game`](Self::start_game); on error the
    /// session stays in `Between` with the previous round.
    pub fn next_round<P>(&mut self, prompt: &mut P) -> Result<(), SessionError>
    where
        P: ResetPrompt + ?Sized,
    {
        self.ensure("start the next round", Phase::Between)?;
        self.begin_round(prompt)?;
        self.enter(Phase::Reveal);
        Ok(())
    }

    /// Back to `Menu` from anywhere, as if the game had just been opened.
    ///
    /// Drops the round and the pool selection, clears the ad hoc list and
    /// restores the default counts. Categories and used-word history are
    /// kept.
    pub fn reset_all(&mut self) {
        info!(from = %self.phase, "session reset");
        self.round = None;
        self.selected = None;
        self.ad_hoc.clear();
        self.setup.reset();
        self.phase = Phase::Menu;
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Validates, draws the word, then assigns roles. Nothing is changed
    /// unless all three succeed (a confirmed reset of the used words is the
    /// one exception, and it is what the player asked for).
    fn begin_round<P>(&mut self, prompt: &mut P) -> Result<(), SessionError>
    where
        P: ResetPrompt + ?Sized,
    {
        self.setup.validate()?;
        if self.pool().is_empty() {
            return Err(ValidationError::EmptyPool.into());
        }

        let pool = self.pool().to_vec();
        let key = self.pool_key();
        let word = self.selector.select_with_reset(&pool, &key, prompt)?;
        let roles = RoleAssigner::assign(self.setup.players(), self.setup.impostors());

        info!(
            pool = %key,
            players = self.setup.players(),
            impostors = roles.impostor_count(),
            "round started"
        );
        self.round = Some(RoundState::new(word, roles));
        Ok(())
    }

    fn ensure(&self, action: &'static str, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        debug!(phase = %self.phase, action, "rejected action");
        SessionError::InvalidTransition {
            phase: self.phase,
            action,
        }
    }

    fn round_mut(&mut self, action: &'static str) -> Result<&mut RoundState, SessionError> {
        let phase = self.phase;
        self.round
            .as_mut()
            .ok_or(SessionError::InvalidTransition { phase, action })
    }

    fn enter(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "{} -> {next} is not a valid transition",
            self.phase
        );
        info!(from = %self.phase, to = %next, "phase changed");
        self.phase = next;
    }
}
