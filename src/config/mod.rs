//! Configuration management module
//!
//! Handles loading, saving, and validation of the user configuration:
//! form relay endpoint, animation timings, and log level.

use crate::{FolioError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub mod cli;

pub use cli::Cli;

/// Hosted form relay endpoint the quote form posts to
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/meelonzv";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// URL receiving the multipart quote submission
    pub endpoint: String,
    /// Delay between typed characters on the intro screen
    pub typing_delay_ms: u64,
    /// UI frame tick
    pub tick_rate_ms: u64,
    /// How long a notification stays on screen
    pub notification_secs: u64,
    /// Default tracing filter, overridden by RUST_LOG
    pub log_level: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            typing_delay_ms: 80,
            tick_rate_ms: 50,
            notification_secs: 5,
            log_level: "info".to_string(),
        }
    }
}

impl FolioConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }

    /// Set the form relay endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the typing delay in milliseconds
    pub fn with_typing_delay_ms(mut self, delay_ms: u64) -> Self {
        self.typing_delay_ms = delay_ms;
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            FolioError::Config(format!("Invalid endpoint URL {}: {}", self.endpoint, e))
        })?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(FolioError::Config(format!(
                    "Unsupported endpoint scheme: {}",
                    scheme
                )))
            }
        }

        if !(1..=1000).contains(&self.typing_delay_ms) {
            return Err(FolioError::Config(format!(
                "Typing delay must be between 1 and 1000 ms (got {})",
                self.typing_delay_ms
            )));
        }

        if !(10..=1000).contains(&self.tick_rate_ms) {
            return Err(FolioError::Config(format!(
                "Tick rate must be between 10 and 1000 ms (got {})",
                self.tick_rate_ms
            )));
        }

        if !(1..=60).contains(&self.notification_secs) {
            return Err(FolioError::Config(format!(
                "Notification lifetime must be between 1 and 60 s (got {})",
                self.notification_secs
            )));
        }

        if self.log_level.trim().is_empty() {
            return Err(FolioError::Config("Log level cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            FolioError::Config(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            FolioError::Config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FolioError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            FolioError::Config(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/gv-folio/gv-folio.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            FolioError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
