//! Configuration file.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Default number of wordlist entries to display.
pub const DEFAULT_DISPLAY_LIMIT: usize = 500;

/// Configuration for the executable.
#[derive(Default, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal display settings.
    pub display: DisplayConfig,

    /// Path the file was loaded from.
    #[serde(skip)]
    file: Option<PathBuf>,
}

/// Terminal display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum number of wordlist entries to print.
    pub limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl Config {
    /// Load a config from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().is_file() {
            return Err(Error::NotFile(path.as_ref().to_path_buf()));
        }

        let contents = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = toml::from_str(&contents)?;
        config.file = Some(path.as_ref().canonicalize()?);
        Ok(config)
    }

    /// Load from a path when given otherwise use the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Default::default()),
        }
    }

    /// Path the config was loaded from.
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}
