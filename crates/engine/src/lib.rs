//! Skeledle engine library.
//!
//! Runs rounds of the anatomy guessing game on top of `skeledle-domain`.
//!
//! ## Structure
//!
//! - `use_cases/` - Round play and diagram exploration
//! - `infrastructure/` - Clock, randomness, configuration and catalog files
//! - `api/` - Terminal front end
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures shared by unit and end-to-end tests.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end tests through the composed `App`.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
