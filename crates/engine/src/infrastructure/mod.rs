//! Infrastructure implementations.
//!
//! Contains port trait implementations and the adapters that feed the core:
//! catalog loading and environment configuration.

pub mod catalog_file;
pub mod clock;
pub mod config;
pub mod ports;
