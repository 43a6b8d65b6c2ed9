//! Round use cases.
//!
//! Handles a play session:
//! - Starting daily and endless rounds
//! - Submitting guesses and reporting progress
//! - Skipping an endless round
//! - Autocomplete and part lookup for the guess box
//! - Restoring a saved round

use std::sync::Arc;

use chrono::NaiveDate;
use skeledle_domain::common::days_since;
use skeledle_domain::{
    filter_parts, AnatomicalPart, Catalog, DomainError, GameMode, RoundId, RoundSnapshot,
    RoundState, RoundStatus,
};

use crate::infrastructure::ports::{ClockPort, RandomPort};

#[derive(Debug, thiserror::Error)]
pub enum RoundError {
    #[error("Unknown part: {0}")]
    UnknownPart(String),
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Creates rounds and applies guesses.
///
/// The catalog is shared and read-only; round states are plain values owned
/// by the caller. Every transition returns a new [`RoundState`].
pub struct RoundEngine {
    catalog: Arc<Catalog>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    daily_epoch: NaiveDate,
}

impl RoundEngine {
    pub fn new(
        catalog: Arc<Catalog>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        daily_epoch: NaiveDate,
    ) -> Self {
        Self {
            catalog,
            clock,
            random,
            daily_epoch,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // =========================================================================
    // Round creation
    // =========================================================================

    /// Seed of today's daily round: whole UTC days since the epoch.
    ///
    /// A clock set before the epoch gives the absolute distance.
    pub fn daily_seed(&self) -> u64 {
        days_since(self.daily_epoch, self.clock.now()).unsigned_abs()
    }

    /// Today's round. Every player gets the same target on the same UTC date.
    pub fn new_daily_round(&self) -> RoundState {
        let seed = self.daily_seed();
        let target = self.catalog.by_seed(seed).clone();
        let state = RoundState::new(self.next_round_id(), target, GameMode::Daily);
        tracing::info!(
            round_id = %state.id(),
            mode = %state.mode(),
            seed,
            "Started daily round"
        );
        tracing::debug!(round_id = %state.id(), target = %state.target().id(), "Daily target");
        state
    }

    /// A round with a uniformly random target.
    pub fn new_endless_round(&self) -> RoundState {
        let target = self
            .catalog
            .random_with(|len| self.random.gen_index(len))
            .clone();
        let state = RoundState::new(self.next_round_id(), target, GameMode::Endless);
        tracing::info!(round_id = %state.id(), mode = %state.mode(), "Started endless round");
        tracing::debug!(round_id = %state.id(), target = %state.target().id(), "Endless target");
        state
    }

    pub fn new_round(&self, mode: GameMode) -> RoundState {
        match mode {
            GameMode::Daily => self.new_daily_round(),
            GameMode::Endless => self.new_endless_round(),
        }
    }

    /// Abandon a playing endless round for a fresh one.
    ///
    /// Daily rounds cannot be skipped and finished rounds stay finished; both
    /// are returned unchanged.
    pub fn skip(&self, state: &RoundState) -> RoundState {
        if state.mode() != GameMode::Endless || state.is_over() {
            tracing::debug!(round_id = %state.id(), mode = %state.mode(), "Skip ignored");
            return state.clone();
        }
        tracing::info!(
            round_id = %state.id(),
            guess_count = state.guess_count(),
            "Skipped endless round"
        );
        self.new_endless_round()
    }

    // =========================================================================
    // Guessing
    // =========================================================================

    /// Apply a guess and return the next state.
    pub fn submit_guess(&self, state: &RoundState, part: &AnatomicalPart) -> RoundState {
        if state.is_over() {
            tracing::warn!(
                round_id = %state.id(),
                status = %state.status(),
                part = %part.id(),
                "Guess submitted to a finished round; ignoring"
            );
            return state.clone();
        }

        let next = state.submit_guess(part, self.clock.now());
        let hint = next.guesses().last().map(|g| g.hint()).unwrap_or_default();
        tracing::debug!(
            round_id = %next.id(),
            part = %part.id(),
            system_match = hint.system_match,
            region_match = hint.region_match,
            name_match = hint.name_match,
            "Scored guess"
        );

        match next.status() {
            RoundStatus::Won => tracing::info!(
                round_id = %next.id(),
                guess_count = next.guess_count(),
                "Round won"
            ),
            RoundStatus::Lost => tracing::info!(
                round_id = %next.id(),
                target = %next.target().id(),
                "Round lost"
            ),
            RoundStatus::Playing => {}
        }
        next
    }

    /// Apply a guess identified by part id.
    pub fn submit_guess_by_id(
        &self,
        state: &RoundState,
        part_id: &str,
    ) -> Result<RoundState, RoundError> {
        let part = self.catalog.get(part_id).ok_or_else(|| {
            tracing::warn!(round_id = %state.id(), part_id, "Guess names an unknown part");
            RoundError::UnknownPart(part_id.to_string())
        })?;
        Ok(self.submit_guess(state, part))
    }

    pub fn remaining_guesses(&self, state: &RoundState) -> usize {
        state.remaining_guesses()
    }

    /// Whether `part` was already guessed this round. Duplicates are still
    /// accepted and cost an attempt.
    pub fn has_been_guessed(&self, state: &RoundState, part: &AnatomicalPart) -> bool {
        state.has_been_guessed(part.id())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn get_part(&self, id: &str) -> Option<&AnatomicalPart> {
        self.catalog.get(id)
    }

    pub fn search_by_prefix(&self, query: &str) -> Vec<&AnatomicalPart> {
        self.catalog.search_by_prefix(query)
    }

    /// Autocomplete rows for the guess box (2-character minimum).
    pub fn suggestions(&self, query: &str) -> Vec<&AnatomicalPart> {
        filter_parts(self.catalog.all(), query)
    }

    /// Rebuild a saved round against this engine's catalog.
    pub fn restore(&self, snapshot: &RoundSnapshot) -> Result<RoundState, RoundError> {
        let state = RoundState::restore(snapshot, &self.catalog)?;
        tracing::info!(
            round_id = %state.id(),
            status = %state.status(),
            guess_count = state.guess_count(),
            "Restored round"
        );
        Ok(state)
    }

    fn next_round_id(&self) -> RoundId {
        RoundId::from_uuid(self.random.gen_uuid())
    }
}
