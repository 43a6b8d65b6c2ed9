//! RoundState aggregate - one playthrough from target selection to win/loss
//!
//! # State machine
//!
//! ```text
//!            wrong guess, count < MAX_GUESSES
//!              ┌──────────┐
//!              ▼          │
//!   new ──► Playing ──────┘
//!              │  \
//!   name match │   \ wrong guess, count == MAX_GUESSES
//!              ▼    ▼
//!             Won   Lost        (terminal: further guesses are ignored)
//! ```
//!
//! A round is a value. [`RoundState::submit_guess`] never mutates the
//! receiver; it returns the next state, so a caller can never observe a
//! half-applied guess and a round can be replayed from its guesses.

use chrono::{DateTime, Utc};

use crate::ids::{PartId, RoundId};
use crate::types::{GameMode, RoundStatus};
use crate::value_objects::ProximityHint;
use crate::AnatomicalPart;

/// Attempts allowed per round.
pub const MAX_GUESSES: usize = 6;

/// A submitted attempt and the feedback it earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    part: AnatomicalPart,
    hint: ProximityHint,
    timestamp: DateTime<Utc>,
}

impl Guess {
    #[inline]
    pub fn part(&self) -> &AnatomicalPart {
        &self.part
    }

    #[inline]
    pub fn hint(&self) -> ProximityHint {
        self.hint
    }

    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// State of a single round.
///
/// # Invariants
///
/// - `target` and `mode` never change for the lifetime of the round
/// - `guesses` is append-only and in submission order
/// - `guesses.len() <= MAX_GUESSES`
/// - `status` is `Won` iff the last guess has a name match, `Lost` iff
///   `MAX_GUESSES` guesses were made without one
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use skeledle_domain::{
///     AnatomicalPart, BodyRegion, BodySystem, DiagramReference, GameMode, PartId, PartName,
///     RoundId, RoundState, RoundStatus,
/// };
///
/// let femur = AnatomicalPart::new(
///     PartId::new("femur").unwrap(),
///     PartName::new("Femur").unwrap(),
///     "Thigh Bone",
///     BodySystem::Skeletal,
///     BodyRegion::LowerLimb,
///     DiagramReference::on_default_asset(["FemurLeft"]).unwrap(),
/// );
///
/// let round = RoundState::new(RoundId::new(), femur.clone(), GameMode::Endless);
/// let round = round.submit_guess(&femur, Utc::now());
/// assert_eq!(round.status(), RoundStatus::Won);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    id: RoundId,
    target: AnatomicalPart,
    mode: GameMode,
    guesses: Vec<Guess>,
    status: RoundStatus,
}

impl RoundState {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Start a round: no guesses, `Playing`.
    pub fn new(id: RoundId, target: AnatomicalPart, mode: GameMode) -> Self {
        Self {
            id,
            target,
            mode,
            guesses: Vec::new(),
            status: RoundStatus::Playing,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> RoundId {
        self.id
    }

    #[inline]
    pub fn target(&self) -> &AnatomicalPart {
        &self.target
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[inline]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Attempts left: `MAX_GUESSES - guess_count`, never below zero.
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    /// Whether a part with this id was guessed before.
    ///
    /// Informational only: guessing the same part again is allowed and
    /// consumes another attempt.
    pub fn has_been_guessed(&self, part_id: &PartId) -> bool {
        self.guesses.iter().any(|g| g.part.id() == part_id)
    }

    // =========================================================================
    // Transition
    // =========================================================================

    /// Score `guessed` against the target and return the next state.
    ///
    /// On a finished round this returns an identical copy: late guesses are
    /// neither recorded nor scored. A name match wins even on the last
    /// attempt.
    pub fn submit_guess(&self, guessed: &AnatomicalPart, now: DateTime<Utc>) -> RoundState {
        if self.status.is_terminal() {
            return self.clone();
        }

        let hint = self.target.proximity_hint(guessed);

        let mut guesses = Vec::with_capacity(self.guesses.len() + 1);
        guesses.extend(self.guesses.iter().cloned());
        guesses.push(Guess {
            part: guessed.clone(),
            hint,
            timestamp: now,
        });

        let status = if hint.name_match {
            RoundStatus::Won
        } else if guesses.len() >= MAX_GUESSES {
            RoundStatus::Lost
        } else {
            RoundStatus::Playing
        };

        RoundState {
            id: self.id,
            target: self.target.clone(),
            mode: self.mode,
            guesses,
            status,
        }
    }
}
