//! Engine configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `SKELEDLE_DAILY_EPOCH` | `2024-01-01` |
//! | `SKELEDLE_CATALOG_PATH` | embedded starter catalog |
//! | `SKELEDLE_MAX_SUGGESTIONS` | `8` |
//!
//! Malformed values fail at startup instead of falling back silently.

use std::path::PathBuf;

use chrono::NaiveDate;
use skeledle_domain::common::{none_if_empty, parse_date};

pub const DAILY_EPOCH_VAR: &str = "SKELEDLE_DAILY_EPOCH";
pub const CATALOG_PATH_VAR: &str = "SKELEDLE_CATALOG_PATH";
pub const MAX_SUGGESTIONS_VAR: &str = "SKELEDLE_MAX_SUGGESTIONS";

/// Launch date of daily mode.
pub const DEFAULT_DAILY_EPOCH: &str = "2024-01-01";

/// Autocomplete rows shown by the terminal front end.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a YYYY-MM-DD date, got '{value}'")]
    InvalidDate { var: &'static str, value: String },
    #[error("{var} must be a positive integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Day zero of the daily seed (UTC calendar date)
    pub daily_epoch: NaiveDate,
    /// Catalog JSON file; `None` uses the embedded starter catalog
    pub catalog_path: Option<PathBuf>,
    pub max_suggestions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            daily_epoch: default_epoch(),
            catalog_path: None,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(DAILY_EPOCH_VAR) {
            if none_if_empty(value.trim()).is_some() {
                config.daily_epoch =
                    parse_date(&value).map_err(|_| ConfigError::InvalidDate {
                        var: DAILY_EPOCH_VAR,
                        value: value.clone(),
                    })?;
            }
        }

        if let Some(value) = lookup(CATALOG_PATH_VAR) {
            config.catalog_path = none_if_empty(value.trim()).map(PathBuf::from);
        }

        if let Some(value) = lookup(MAX_SUGGESTIONS_VAR) {
            if none_if_empty(value.trim()).is_some() {
                config.max_suggestions = value
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| ConfigError::InvalidNumber {
                        var: MAX_SUGGESTIONS_VAR,
                        value: value.clone(),
                    })?;
            }
        }

        Ok(config)
    }
}

fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.daily_epoch, parse_date(DEFAULT_DAILY_EPOCH).unwrap());
        assert!(config.catalog_path.is_none());
        assert_eq!(config.max_suggestions, 8);
    }

    #[test]
    fn reads_all_variables() {
        let config = EngineConfig::from_lookup(lookup(&[
            (DAILY_EPOCH_VAR, "2025-06-01"),
            (CATALOG_PATH_VAR, "/srv/skeledle/parts.json"),
            (MAX_SUGGESTIONS_VAR, " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.daily_epoch, parse_date("2025-06-01").unwrap());
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/srv/skeledle/parts.json"))
        );
        assert_eq!(config.max_suggestions, 3);
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = EngineConfig::from_lookup(lookup(&[
            (DAILY_EPOCH_VAR, ""),
            (CATALOG_PATH_VAR, "  "),
        ]))
        .unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn rejects_malformed_epoch() {
        let err = EngineConfig::from_lookup(lookup(&[(DAILY_EPOCH_VAR, "01/01/2024")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDate { .. }));
    }

    #[test]
    fn rejects_zero_suggestions() {
        let err =
            EngineConfig::from_lookup(lookup(&[(MAX_SUGGESTIONS_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }
}
