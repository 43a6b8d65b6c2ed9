//! Feedback computed for a single guess.

use serde::{Deserialize, Serialize};

/// How close a guessed part is to the round's target.
///
/// Always derived from a target/guess pair via
/// [`AnatomicalPart::proximity_hint`](crate::AnatomicalPart::proximity_hint);
/// it is stored only inside the [`Guess`](crate::Guess) that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityHint {
    /// Guess belongs to the target's body system
    pub system_match: bool,
    /// Guess lies in the target's body region
    pub region_match: bool,
    /// Guess names the target (name, common name, or alias)
    pub name_match: bool,
}

impl ProximityHint {
    pub fn new(system_match: bool, region_match: bool, name_match: bool) -> Self {
        Self {
            system_match,
            region_match,
            name_match,
        }
    }

    /// Check mark used by text front ends.
    pub fn mark(matched: bool) -> &'static str {
        if matched {
            "✓"
        } else {
            "✗"
        }
    }
}
