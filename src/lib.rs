//! GV Folio - terminal portfolio
//!
//! A full-screen TUI presenting a personal portfolio: a typing intro,
//! a scrollable main page with biography, services carousel, a quote
//! request form relayed to a hosted form service, and social links.

use thiserror::Error;

pub mod app;
pub mod config;
pub mod content;
pub mod form;
pub mod logging;
pub mod navigation;
pub mod notify;
pub mod typing;
pub mod util;

/// Crate-level error type
#[derive(Debug, Error)]
pub enum FolioError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Terminal setup or rendering error
    #[error("TUI error: {0}")]
    Tui(String),
    /// HTTP client could not be built or a request failed outright
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for FolioError {
    fn from(err: toml::ser::Error) -> Self {
        FolioError::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Error handling utilities
pub mod error {
    use super::FolioError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &FolioError) -> String {
        match error {
            FolioError::Config(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            FolioError::Tui(_) => {
                "Could not drive the terminal. Try a different terminal emulator.".to_string()
            }
            FolioError::Http(_) => {
                "Could not prepare the network client. Check your TLS setup.".to_string()
            }
            FolioError::Io(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check file permissions of the config and data directories."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "gv-folio";
pub const CONFIG_FILE: &str = "gv-folio.toml";
pub const LOG_FILE: &str = "gv-folio.log";
