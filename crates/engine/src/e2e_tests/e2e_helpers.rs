//! Helpers for constructing a fully wired `App`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use skeledle_domain::{AnatomicalPart, Catalog};

use crate::app::App;
use crate::infrastructure::clock::{FixedClock, FixedRandom};
use crate::infrastructure::config::EngineConfig;
use crate::test_fixtures::utc;

/// A composed app plus the knobs the test fixed.
pub struct E2ETestContext {
    pub app: App,
    pub now: DateTime<Utc>,
}

impl E2ETestContext {
    /// App over `parts` where every random pick returns `index`.
    pub fn with_parts(parts: Vec<AnatomicalPart>, index: usize) -> Self {
        Self::build(parts, index, EngineConfig::default())
    }

    pub fn build(parts: Vec<AnatomicalPart>, index: usize, config: EngineConfig) -> Self {
        let now = utc(2024, 3, 15, 9);
        let catalog = Catalog::new(parts).expect("e2e catalog");
        let app = App::new(
            config,
            catalog,
            Arc::new(FixedClock(now)),
            Arc::new(FixedRandom(index)),
        );
        Self { app, now }
    }

    /// Play a scripted terminal session and return everything it printed.
    pub fn run_script(&self, mode: skeledle_domain::GameMode, script: &str) -> String {
        let mut session = crate::api::TerminalSession::new(&self.app, mode);
        let mut out = Vec::new();
        session
            .run(std::io::Cursor::new(script), &mut out)
            .expect("terminal session");
        String::from_utf8(out).expect("utf-8 output")
    }
}
