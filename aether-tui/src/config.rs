//! Dashboard configuration — optional TOML file, every key has a default.
//!
//! ```toml
//! [ui]
//! tick_rate_ms = 100
//! mouse = true
//! sidebar_width = 26
//!
//! [log]
//! filter = "info"
//! file = "/tmp/aether.log"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll timeout per frame, in milliseconds.
    pub tick_rate_ms: u64,
    /// Capture mouse clicks on sidebar entries.
    pub mouse: bool,
    /// Sidebar column width; clamped to half the terminal.
    pub sidebar_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            mouse: true,
            sidebar_width: 26,
        }
    }
}

/// Logging settings. The terminal is owned by the UI, so logs go to a file or nowhere.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"aether_core=debug"`.
    pub filter: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl TuiConfig {
    /// `<config dir>/aether/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aether").join("config.toml"))
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content)
                .with_context(|| format!("invalid config file {}", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read config file {}", path.display()))
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Poll timeout for the event loop, never below 10ms.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms.max(10))
    }
}
