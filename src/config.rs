//! Configuration for output capture

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Default number of bytes requested per read
pub const DEFAULT_READ_SIZE: usize = 4096;

/// How captured output reaches its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Raw bytes to a real terminal, which interprets them itself
    Passthrough,
    /// Completed lines converted to markup for a log view
    #[default]
    Markup,
}

/// Capture configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output mode
    pub mode: OutputMode,
    /// Bytes requested per read from the input stream
    pub read_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            read_size: DEFAULT_READ_SIZE,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/pty-markup/config.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Self::default()
    }

    /// Reject values the runner cannot use
    pub fn validate(&self) -> Result<()> {
        if self.read_size == 0 {
            return Err(Error::InvalidConfig("read_size must be at least 1".into()));
        }
        Ok(())
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("pty-markup"))
}
