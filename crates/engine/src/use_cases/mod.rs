//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area of the game.

pub mod explore;
pub mod round;

pub use explore::{DiagramSummary, ExploreDiagrams};
pub use round::{RoundEngine, RoundError};
