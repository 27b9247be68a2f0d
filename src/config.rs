//! Operator configuration, read from TOML.
//!
//! Default location: `<config dir>/cgi-delete/config.toml`
//! (`~/.config/cgi-delete/config.toml` on Linux).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::fs::{expand_home, DEFAULT_DATA_DIR};
use crate::response::OutputMode;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding the deletable files. Filenames are appended to it verbatim.
    pub data_dir: String,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_level: String,
    pub output: OutputMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            log_level: "warn".to_string(),
            output: OutputMode::Auto,
        }
    }
}

impl Config {
    /// Loads `explicit` if given (it must exist), otherwise the default file if it
    /// exists, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.data_dir = expand_home(&config.data_dir)
            .with_context(|| format!("Failed to expand data_dir '{}'", config.data_dir))?;
        Ok(config)
    }
}

pub(crate) fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cgi-delete").join("config.toml"))
}
