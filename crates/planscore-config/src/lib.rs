//! Configuration for planscore score definitions.
//!
//! Declare the score shape of a planning problem in TOML or YAML and build the
//! matching [`AnyScoreDefinition`] without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use planscore_config::ScoreConfig;
//! use planscore_core::ScoreType;
//!
//! let config = ScoreConfig::from_toml_str(r#"
//!     score_type = "bendable"
//!     bendable_hard_levels_size = 1
//!     bendable_soft_levels_size = 2
//!     best_score_limit = "[0]hard/[0/-100]soft"
//! "#).unwrap();
//!
//! let definition = config.build_score_definition().unwrap();
//! assert_eq!(definition.score_type(), ScoreType::Bendable);
//! assert_eq!(definition.levels_count(), 3);
//!
//! let limit = config.best_score_limit().unwrap().unwrap();
//! assert_eq!(limit.to_short_string(), "[0/-100]soft");
//! ```

use std::path::Path;

use planscore_core::{AnyScore, AnyScoreDefinition, ScoreError, ScoreType};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Score error: {0}")]
    Score(#[from] ScoreError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Score definition configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoreConfig {
    /// Score variant of the planning solution.
    pub score_type: ScoreType,

    /// Number of hard levels; bendable score types only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bendable_hard_levels_size: Option<usize>,

    /// Number of soft levels; bendable score types only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bendable_soft_levels_size: Option<usize>,

    /// Score at which solving may stop, in the full text form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_score_limit: Option<String>,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        ScoreConfig::new(ScoreType::HardSoft)
    }
}

impl ScoreConfig {
    /// Creates a configuration for the given score type.
    pub fn new(score_type: ScoreType) -> Self {
        ScoreConfig {
            score_type,
            bendable_hard_levels_size: None,
            bendable_soft_levels_size: None,
            best_score_limit: None,
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading score configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading score configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the bendable level counts.
    pub fn with_bendable_levels(mut self, hard_levels: usize, soft_levels: usize) -> Self {
        self.bendable_hard_levels_size = Some(hard_levels);
        self.bendable_soft_levels_size = Some(soft_levels);
        self
    }

    /// Sets the best score limit.
    pub fn with_best_score_limit(mut self, limit: impl Into<String>) -> Self {
        self.best_score_limit = Some(limit.into());
        self
    }

    /// Builds the score definition this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a bendable type is missing a level
    /// count, or a fixed type sets one.
    pub fn build_score_definition(&self) -> Result<AnyScoreDefinition, ConfigError> {
        let definition = if self.score_type.is_bendable() {
            let (hard, soft) = match (self.bendable_hard_levels_size, self.bendable_soft_levels_size)
            {
                (Some(hard), Some(soft)) => (hard, soft),
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "{} requires both bendable_hard_levels_size and bendable_soft_levels_size",
                        self.score_type
                    )))
                }
            };
            match self.score_type {
                ScoreType::BendableDouble => AnyScoreDefinition::bendable_double(hard, soft),
                _ => AnyScoreDefinition::bendable(hard, soft),
            }
        } else {
            if self.bendable_hard_levels_size.is_some() || self.bendable_soft_levels_size.is_some()
            {
                return Err(ConfigError::Invalid(format!(
                    "{} does not accept bendable level sizes",
                    self.score_type
                )));
            }
            AnyScoreDefinition::fixed(self.score_type)?
        };

        debug!(
            score_type = %definition.score_type(),
            hard_levels_count = definition.hard_levels_count(),
            soft_levels_count = definition.soft_levels_count(),
            "Built score definition"
        );
        Ok(definition)
    }

    /// Returns the parsed best score limit, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Score`] if the limit does not match the configured
    /// score definition.
    pub fn best_score_limit(&self) -> Result<Option<AnyScore>, ConfigError> {
        let Some(limit) = self.best_score_limit.as_deref() else {
            return Ok(None);
        };
        let definition = self.build_score_definition()?;
        Ok(Some(definition.parse_score(limit)?))
    }
}

#[cfg(test)]
mod tests;
