//! Match configuration: defaults, JSON and environment overrides.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::deck::DeckMode;
use crate::domain::rules::{MATCH_TARGET, PLAYERS};
use crate::domain::state::PlayerId;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable '{name}' has invalid value '{value}': {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("invalid match config: {0}")]
    Invalid(String),
    #[error("malformed match config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Points a side needs to win the match.
    pub target_score: u16,
    pub deck_mode: DeckMode,
    /// Shuffle seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Mão of the first hand.
    pub first_leader: PlayerId,
    /// Upper bound on consecutive bot actions per `run_bots` call.
    pub max_bot_steps: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            target_score: MATCH_TARGET,
            deck_mode: DeckMode::Truco,
            seed: None,
            first_leader: 0,
            max_bot_steps: 64,
        }
    }
}

impl MatchConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `TRUCO_TARGET_SCORE`, `TRUCO_DECK_MODE`,
    /// `TRUCO_SEED` and `TRUCO_FIRST_LEADER` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(target) = parsed_var("TRUCO_TARGET_SCORE")? {
            config.target_score = target;
        }
        if let Some(mode) = optional_var("TRUCO_DECK_MODE") {
            config.deck_mode = parse_deck_mode(&mode)?;
        }
        if let Some(seed) = parsed_var("TRUCO_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(leader) = parsed_var("TRUCO_FIRST_LEADER")? {
            config.first_leader = leader;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_score == 0 {
            return Err(ConfigError::Invalid(
                "target_score must be greater than zero".into(),
            ));
        }
        if self.first_leader as usize >= PLAYERS {
            return Err(ConfigError::Invalid(format!(
                "first_leader must be a seat below {PLAYERS}, got {}",
                self.first_leader
            )));
        }
        if self.max_bot_steps == 0 {
            return Err(ConfigError::Invalid(
                "max_bot_steps must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T>(name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = optional_var(name) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidVar {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        })
}

fn parse_deck_mode(raw: &str) -> Result<DeckMode, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "truco" | "40" => Ok(DeckMode::Truco),
        "full" | "48" => Ok(DeckMode::Full),
        _ => Err(ConfigError::InvalidVar {
            name: "TRUCO_DECK_MODE",
            value: raw.to_string(),
            reason: "expected 'truco' or 'full'".into(),
        }),
    }
}
