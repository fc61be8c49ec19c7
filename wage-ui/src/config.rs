//! Optional TOML configuration for the calculator.
//!
//! ```toml
//! currency_symbol = "$"
//! log_level = "warn"
//!
//! [defaults]
//! mode = "hourly"
//! hours_per_week = "40"
//! hourly_rate = "20"
//! ```
//!
//! Every key is optional. Defaults pre-fill the form; command-line flags
//! override them.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use wage_core::CalculationMode;

/// File read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "wage-calc.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Initial values for the earnings fields of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormDefaults {
    pub mode: CalculationMode,
    pub hours_per_week: Option<String>,
    pub hourly_rate: Option<String>,
    pub annual_salary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub currency_symbol: String,
    pub log_level: String,
    pub defaults: FormDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            log_level: "warn".to_string(),
            defaults: FormDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Parses and validates configuration text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml(&text)
    }

    /// Loads `explicit` when given (it must exist), otherwise
    /// [`DEFAULT_CONFIG_FILE`] when present, otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol must not be empty".to_string(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".to_string()));
        }
        Ok(())
    }
}
