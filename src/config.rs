use crate::app_dirs::AppDirs;
use crate::difficulty::Difficulty;
use crate::round::RoundSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Optional preferences read from `config.json`. Absent fields fall back to
/// built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub difficulty: Option<Difficulty>,
    /// `false` turns the round's single hint off
    pub hints: Option<bool>,
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub trait ConfigStore {
    /// `Ok(None)` when there is no config to read
    fn try_load(&self) -> Result<Option<Config>, ConfigError>;

    /// Load the config, falling back to defaults on any problem
    fn load(&self) -> Config {
        match self.try_load() {
            Ok(cfg) => cfg.unwrap_or_default(),
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Config::default()
            }
        }
    }
}

/// Read-only JSON config file. Games never write it.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: Option<PathBuf>,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: Some(p.as_ref().to_path_buf()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn try_load(&self) -> Result<Option<Config>, ConfigError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.clone(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub difficulty: Option<Difficulty>,
    pub hints: Option<bool>,
    pub seed: Option<u64>,
}

/// Fully resolved settings for one process run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub round: RoundSettings,
    /// `None` means seed from OS entropy
    pub seed: Option<u64>,
}

impl RuntimeSettings {
    /// CLI flag > config file > built-in default
    pub fn resolve(overrides: &Overrides, config: &Config) -> Self {
        Self {
            round: RoundSettings {
                difficulty: overrides.difficulty.or(config.difficulty),
                hints: overrides.hints.or(config.hints).unwrap_or(true),
            },
            seed: overrides.seed.or(config.seed),
        }
    }
}
