//! Scheduler configuration (TOML, every field optional).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::SystemClock;
use crate::ports::clock::DEFAULT_UTC_OFFSET_HOURS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("utc_offset_hours must be within -23..=23, got {0}")]
    InvalidOffset(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeakspotConfig {
    /// Tasks scoring below this never enter the queue.
    #[serde(default)]
    pub min_score: u32,

    /// Offset used to decide what "today" is for the learner.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

fn default_utc_offset_hours() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}

impl Default for WeakspotConfig {
    fn default() -> Self {
        Self {
            min_score: 0,
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

impl WeakspotConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.clock()?;
        Ok(config)
    }

    /// Wall clock in the configured offset.
    pub fn clock(&self) -> Result<SystemClock, ConfigError> {
        SystemClock::with_offset_hours(self.utc_offset_hours)
            .ok_or(ConfigError::InvalidOffset(self.utc_offset_hours))
    }
}
