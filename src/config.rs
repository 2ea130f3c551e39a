// src/config.rs
//! Host configuration: an optional JSON file, then environment overrides.

use crate::calendar::{CalendarSystem, DateError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_DATE_FORMAT: &str = "LIPI_DATE_FORMAT";
pub const ENV_SHOW_AGE: &str = "LIPI_SHOW_AGE";
pub const ENV_LOG_DIR: &str = "LIPI_LOG_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid config {path}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
    #[error(transparent)]
    Calendar(#[from] DateError),
    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Calendar a fresh date field starts in.
    pub default_format: CalendarSystem,
    /// Whether date views include the age line.
    pub show_age: bool,
    pub log_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            default_format: CalendarSystem::Bs,
            show_age: true,
            log_dir: std::env::temp_dir().join("nepali-lipi"),
        }
    }
}

impl HostConfig {
    /// Reads `path` when given, then applies the `LIPI_*` environment
    /// variables on top.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
    }

    /// Applies overrides from `lookup`, which maps a variable name to its
    /// value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup(ENV_DATE_FORMAT) {
            self.default_format = format.parse()?;
        }
        if let Some(flag) = lookup(ENV_SHOW_AGE) {
            self.show_age = match flag.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidFlag { name: ENV_SHOW_AGE, value: flag }),
            };
        }
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            self.log_dir = PathBuf::from(dir);
        }
        Ok(())
    }
}
