//! Serializable form of a round
//!
//! Parts are stored by id only. Restoring re-resolves every id against a
//! catalog and replays the guesses through [`RoundState::submit_guess`], so a
//! restored round always satisfies the state machine's invariants; stored
//! hints are informational and recomputed on restore.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::DomainError;
use crate::ids::{PartId, RoundId};
use crate::types::{GameMode, RoundStatus};
use crate::value_objects::ProximityHint;

use super::round::RoundState;

/// Round as it is written to storage or sent to a front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub round_id: RoundId,
    pub target_part_id: PartId,
    pub mode: GameMode,
    #[serde(default)]
    pub guesses: Vec<GuessSnapshot>,
    pub status: RoundStatus,
}

/// One guess inside a [`RoundSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessSnapshot {
    pub part_id: PartId,
    pub hint: ProximityHint,
    pub timestamp: DateTime<Utc>,
}

impl RoundState {
    /// Capture this round by part ids.
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round_id: self.id(),
            target_part_id: self.target().id().clone(),
            mode: self.mode(),
            guesses: self
                .guesses()
                .iter()
                .map(|g| GuessSnapshot {
                    part_id: g.part().id().clone(),
                    hint: g.hint(),
                    timestamp: g.timestamp(),
                })
                .collect(),
            status: self.status(),
        }
    }

    /// Rebuild a round from a snapshot.
    ///
    /// # Errors
    ///
    /// - `DomainError::NotFound` if the target or any guessed part is not in
    ///   `catalog`
    /// - `DomainError::Validation` if replaying the guesses does not
    ///   reproduce the stored status (e.g. guesses recorded after the round
    ///   ended)
    pub fn restore(snapshot: &RoundSnapshot, catalog: &Catalog) -> Result<Self, DomainError> {
        let target = catalog
            .get(snapshot.target_part_id.as_str())
            .ok_or_else(|| {
                DomainError::not_found("AnatomicalPart", snapshot.target_part_id.as_str())
            })?;

        let mut state = RoundState::new(snapshot.round_id, target.clone(), snapshot.mode);
        for guess in &snapshot.guesses {
            let part = catalog
                .get(guess.part_id.as_str())
                .ok_or_else(|| DomainError::not_found("AnatomicalPart", guess.part_id.as_str()))?;
            state = state.submit_guess(part, guess.timestamp);
        }

        if state.guess_count() != snapshot.guesses.len() {
            return Err(DomainError::validation(format!(
                "Snapshot records {} guesses but only {} were playable",
                snapshot.guesses.len(),
                state.guess_count()
            )));
        }
        if state.status() != snapshot.status {
            return Err(DomainError::validation(format!(
                "Snapshot status {} does not match replayed status {}",
                snapshot.status,
                state.status()
            )));
        }

        Ok(state)
    }
}
