//! End-to-end tests.
//!
//! These tests build a complete [`App`](crate::App) with a fixed clock and
//! fixed randomness and play rounds through it, including a scripted
//! terminal session.
//!
//! ```bash
//! cargo test -p skeledle-engine --lib e2e_tests
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
