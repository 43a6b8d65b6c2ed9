//! Common utility functions shared across the Skeledle crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - only chrono for date utilities

pub mod datetime;
pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use datetime::{days_since, parse_date};
pub use string::{names_match, none_if_empty, normalize};
