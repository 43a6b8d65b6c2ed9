//! Application state and composition.

use std::sync::Arc;

use skeledle_domain::Catalog;

use crate::infrastructure::{
    catalog_file::{load_catalog, CatalogLoadError},
    clock::{SystemClock, SystemRandom},
    config::EngineConfig,
    ports::{ClockPort, RandomPort},
};
use crate::use_cases::{ExploreDiagrams, RoundEngine};

/// Main application state.
///
/// Holds the shared catalog and the use cases built on it. Front ends borrow
/// an `App` and keep their own round state.
pub struct App {
    pub config: EngineConfig,
    pub catalog: Arc<Catalog>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub round: Arc<RoundEngine>,
    pub explore: Arc<ExploreDiagrams>,
}

impl App {
    pub fn new(
        config: EngineConfig,
        catalog: Catalog,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let use_cases = UseCases {
            round: Arc::new(RoundEngine::new(
                catalog.clone(),
                clock,
                random,
                config.daily_epoch,
            )),
            explore: Arc::new(ExploreDiagrams::new(catalog.clone())),
        };

        Self {
            config,
            catalog,
            use_cases,
        }
    }

    /// Load the configured catalog and wire real time and randomness.
    ///
    /// An unusable catalog is returned as an error here, before any round
    /// can be requested.
    pub fn from_config(config: EngineConfig) -> Result<Self, CatalogLoadError> {
        let catalog = load_catalog(&config)?;
        Ok(Self::new(
            config,
            catalog,
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        ))
    }
}
