use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from explicit-path configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub host: HostConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal. Dragging needs it.
    pub mouse_enabled: bool,
    /// Theme name (reserved for future use).
    pub theme: String,
}

/// Demo host configuration: which markup shape to emit and who is fighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Markup shape the host emits: "grouped" (current) or "flat" (legacy).
    pub schema: String,
    /// Seed roster for the encounter. Empty means the built-in party.
    pub roster: Vec<RosterEntry>,
}

/// One seeded participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    /// Starting initiative; absent means not yet rolled.
    pub initiative: Option<f64>,
    /// Whether the (non-GM) viewer owns this participant.
    #[serde(default)]
    pub owner: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tui: TuiConfig::default(),
            host: HostConfig::default(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: true,
            theme: "default".to_string(),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            schema: "grouped".to_string(),
            roster: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/easyinit/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match Self::from_path(&config_path) {
            Ok(config) => {
                log::info!("Loaded config from {}", config_path.display());
                config
            }
            Err(ConfigError::Io(_)) => {
                log::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse config at {}: {e} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path, surfacing failures.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("easyinit").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
