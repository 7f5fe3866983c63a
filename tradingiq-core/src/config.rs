//! Dashboard configuration loaded from TOML.
//!
//! Resolution order: an explicit `--config` path, otherwise
//! `<config_dir>/tradingiq/config.toml`. A missing file yields defaults;
//! an unreadable or invalid file is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::candles::{CANDLE_DAYS, MAX_CANDLE_DAYS};
use crate::data::BUILTIN_SYMBOLS;
use crate::domain::normalize_symbol;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// User-tunable dashboard settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Symbol analyzed at startup.
    pub default_symbol: String,
    /// Number of synthetic daily candles to generate.
    pub candle_days: usize,
    /// Master seed for reproducible candles. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Optional TOML fixture file replacing the built-in symbols.
    pub fixtures: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Quick-pick symbols shown in the search bar. May include symbols
    /// without fixtures.
    pub popular_symbols: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let mut popular: Vec<String> = BUILTIN_SYMBOLS.iter().map(|s| s.to_string()).collect();
        popular.extend(["GOOGL", "MSFT", "AMZN", "NVDA"].map(String::from));
        Self {
            default_symbol: "AAPL".into(),
            candle_days: CANDLE_DAYS,
            seed: None,
            fixtures: None,
            log_level: "info".into(),
            popular_symbols: popular,
        }
    }
}

impl DashboardConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: DashboardConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize()?;
        Ok(config)
    }

    /// Load from `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    /// Load from an explicit path, or from the default location.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    fn normalize(&mut self) -> Result<(), ConfigError> {
        self.default_symbol = normalize_symbol(&self.default_symbol);
        if self.default_symbol.is_empty() {
            return Err(ConfigError::Invalid("default_symbol must not be empty".into()));
        }
        check_candle_days(self.candle_days)?;
        self.popular_symbols = self
            .popular_symbols
            .iter()
            .map(|s| normalize_symbol(s))
            .filter(|s| !s.is_empty())
            .collect();
        Ok(())
    }
}

/// A candle window must hold between 1 and [`MAX_CANDLE_DAYS`] days.
pub fn check_candle_days(days: usize) -> Result<usize, ConfigError> {
    if (1..=MAX_CANDLE_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(ConfigError::Invalid(format!(
            "candle_days must be between 1 and {MAX_CANDLE_DAYS}, got {days}"
        )))
    }
}

/// `<config_dir>/tradingiq/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tradingiq").join("config.toml"))
}
