//! Runtime configuration loaded from an optional TOML file.
//!
//! ```toml
//! save_dir = "/home/me/adventures"
//! autosave_every = 50
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every field has a default, so an empty or missing file yields a usable
//! [`GameConfig`]. Game rules themselves live in [`crate::constants`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AUTOSAVE_EVERY, SAVE_DIR_NAME};
use crate::errors::{ConfigError, PersistenceError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Directory holding one JSON file per character. Defaults to `~/.acarnam`.
    #[serde(default)]
    pub save_dir: Option<PathBuf>,
    /// Number of exploration actions between periodic saves.
    #[serde(default = "default_autosave_every")]
    pub autosave_every: u32,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_autosave_every() -> u32 {
    DEFAULT_AUTOSAVE_EVERY
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_dir: None,
            autosave_every: default_autosave_every(),
            logging: LoggingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from `path`. A missing file is not an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: GameConfig = toml::from_str(content)?;
        // Zero would mean "save every action modulo zero".
        if config.autosave_every == 0 {
            config.autosave_every = default_autosave_every();
        }
        Ok(config)
    }

    /// Resolves the save directory, falling back to `~/.acarnam`.
    pub fn resolve_save_dir(&self) -> Result<PathBuf, PersistenceError> {
        match &self.save_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::home_dir()
                .map(|home| home.join(SAVE_DIR_NAME))
                .ok_or(PersistenceError::NoHomeDir),
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.logging
            .level
            .parse()
            .unwrap_or(log::LevelFilter::Warn)
    }
}
