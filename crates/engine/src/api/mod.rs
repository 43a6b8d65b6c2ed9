//! API layer - front ends that drive the round engine.

pub mod terminal;

pub use terminal::{parse_command, Command, TerminalSession};
