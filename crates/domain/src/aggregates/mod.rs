//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//!
//! | Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Newtypes valid by construction |
//! | Value Object immutability | `#[derive(Clone)]` + no `&mut` methods |
//! | Factory pattern | `::new()` + builder pattern |
//! | State transitions | `&self -> Self` returning the next value |

pub mod anatomical_part;
pub mod round;
pub mod snapshot;

pub use anatomical_part::AnatomicalPart;
pub use round::{Guess, RoundState, MAX_GUESSES};
pub use snapshot::{GuessSnapshot, RoundSnapshot};
