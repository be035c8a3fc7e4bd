//! `jcanon.toml`: engine limits, the folding switch and logging.
//!
//! ```toml
//! max_nesting_depth = 128
//! fold_declarators = true
//!
//! [logging]
//! level = "warn"
//! json = false
//! ```

use std::path::Path;

use jcanon_convert::EngineOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod logging;

pub use logging::{init_tracing, LoggingConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Host nesting depth at which conversion gives up. Must be at least 1.
    pub max_nesting_depth: u32,
    /// When false every declarator converts on its own.
    pub fold_declarators: bool,
    pub logging: LoggingConfig,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        let engine = EngineOptions::default();
        Self {
            max_nesting_depth: engine.max_nesting_depth,
            fold_declarators: engine.fold_declarators,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConvertConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ConvertConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: "jcanon.config",
            path = %path.display(),
            max_nesting_depth = config.max_nesting_depth,
            fold_declarators = config.fold_declarators,
            "loaded config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nesting_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_nesting_depth must be at least 1".to_owned(),
            ));
        }
        if !self.fold_declarators {
            tracing::warn!(
                target: "jcanon.config",
                "declarator folding is off; every declarator converts to its own definition"
            );
        }
        Ok(())
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions::from(self)
    }
}

impl From<&ConvertConfig> for EngineOptions {
    fn from(config: &ConvertConfig) -> Self {
        EngineOptions {
            max_nesting_depth: config.max_nesting_depth,
            fold_declarators: config.fold_declarators,
        }
    }
}
