//! Configuration for xdo
//!
//! Optional settings are read from `~/.config/xdo/config.toml`. A missing
//! file means defaults; a file that exists but cannot be read or parsed is
//! an error.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings file contents
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display name to connect to; `$DISPLAY` when unset
    pub display: Option<String>,
    pub activate: ActivateConfig,
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Configuration loaded from {:?}", path);
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Get the path to the config file
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xdo").join("config.toml"))
    }
}

/// `_NET_ACTIVE_WINDOW` request settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActivateConfig {
    /// Source indication: 1 = application, 2 = pager
    pub source: u32,
}

impl Default for ActivateConfig {
    fn default() -> Self {
        Self { source: 1 }
    }
}
