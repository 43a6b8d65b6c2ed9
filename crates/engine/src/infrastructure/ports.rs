//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist so that time and randomness can be fixed in tests; the catalog
//! itself is a plain in-memory value and needs no port.

use chrono::{DateTime, Utc};
use uuid::Uuid;

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait RandomPort: Send + Sync {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn gen_index(&self, len: usize) -> usize;
    fn gen_uuid(&self) -> Uuid;
}
