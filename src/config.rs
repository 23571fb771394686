use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("auto_advance_ms must be greater than zero")]
    ZeroPeriod,
}

/// Tunables shared by every page feature.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Auto-advance period of the carousel, in milliseconds.
    pub auto_advance_ms: u64,
    pub scroll_spy_offset: f64,
    pub carousel_home_offset: f64,
    pub preference_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: AUTO_ADVANCE_PERIOD_MS,
            scroll_spy_offset: SCROLL_SPY_OFFSET,
            carousel_home_offset: CAROUSEL_HOME_OFFSET,
            preference_key: PREFERRED_LANGUAGE_KEY.to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_toml_str(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.auto_advance_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(path, &contents)
    }

    pub fn auto_advance_period(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}
