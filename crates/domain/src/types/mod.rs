//! Shared vocabulary types.
//!
//! Closed enumerations used by parts, rounds, and snapshots.

mod body;
mod game;

pub use body::{BodyRegion, BodySystem};
pub use game::{GameMode, RoundStatus};
