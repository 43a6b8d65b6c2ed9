//! Skeledle domain.
//!
//! Anatomical parts, the read-only catalog that holds them, the autocomplete
//! filter, and the round state machine. Everything here is pure: the clock
//! is passed in as a timestamp and randomness as an index-picking closure.

extern crate self as skeledle_domain;

pub mod aggregates;
pub mod catalog;
pub mod common;
pub mod error;
pub mod ids;
pub mod search;
pub mod types;
pub mod value_objects;

pub use aggregates::{
    AnatomicalPart, Guess, GuessSnapshot, RoundSnapshot, RoundState, MAX_GUESSES,
};
pub use catalog::Catalog;
pub use error::DomainError;
pub use ids::{PartId, RoundId};
pub use search::{filter_parts, MIN_QUERY_LENGTH};
pub use types::{BodyRegion, BodySystem, GameMode, RoundStatus};
pub use value_objects::{
    diagram_label, DiagramReference, PartName, ProximityHint, DEFAULT_DIAGRAM_ASSET,
};
