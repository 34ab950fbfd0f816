//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Appended to a meal's name by `duplicate_meal`
    pub copy_suffix: String,
    /// Quantity given to draft foods that match nothing in the catalog
    pub draft_default_quantity: f64,
    pub draft_default_unit: String,
    /// Lowest combined similarity accepted by the matcher's fuzzy stage
    pub min_fuzzy_similarity: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            copy_suffix: " (Cópia)".into(),
            draft_default_quantity: 100.0,
            draft_default_unit: "g".into(),
            min_fuzzy_similarity: 0.85,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.draft_default_quantity.is_finite() || self.draft_default_quantity <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "draft_default_quantity must be positive, got {}",
                self.draft_default_quantity
            )));
        }
        if !(self.min_fuzzy_similarity > 0.0 && self.min_fuzzy_similarity <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "min_fuzzy_similarity must be in (0, 1], got {}",
                self.min_fuzzy_similarity
            )));
        }
        Ok(())
    }
}
