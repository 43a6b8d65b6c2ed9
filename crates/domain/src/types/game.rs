//! Round vocabulary: how a target is picked and where a round stands.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the target part of a round is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Target derived from the current date; everyone gets the same part.
    Daily,
    /// Target drawn uniformly at random; play as many rounds as you like.
    Endless,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Daily => "daily",
            GameMode::Endless => "endless",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(GameMode::Daily),
            "endless" => Ok(GameMode::Endless),
            _ => Err(DomainError::parse(format!("Unknown game mode: {}", s))),
        }
    }
}

/// Lifecycle status of a round. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundStatus::Playing => "playing",
            RoundStatus::Won => "won",
            RoundStatus::Lost => "lost",
        }
    }

    /// True once no further guesses will be scored.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundStatus::Playing)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!("Daily".parse::<GameMode>().unwrap(), GameMode::Daily);
        assert_eq!(" endless".parse::<GameMode>().unwrap(), GameMode::Endless);
        assert!("weekly".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_status_terminal() {
        assert!(!RoundStatus::Playing.is_terminal());
        assert!(RoundStatus::Won.is_terminal());
        assert!(RoundStatus::Lost.is_terminal());
        assert_eq!(RoundStatus::default(), RoundStatus::Playing);
    }
}
