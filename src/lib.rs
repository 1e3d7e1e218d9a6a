//! LingAfriq - African language learning in the terminal
//!
//! A cross-platform TUI application for learning African languages:
//! guided lessons, unit quizzes, and a mock AI practice chat, with
//! locally persisted configuration and session history.

use std::fmt;

// Public re-exports
pub mod app;
pub mod config;
pub mod content;
pub mod logging;
pub mod models;
pub mod session;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum LingAfriqError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Session history persistence error
    PersistenceError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Logging setup error
    LoggingError(String),
}

impl fmt::Display for LingAfriqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LingAfriqError::IoError(err) => write!(f, "I/O error: {}", err),
            LingAfriqError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            LingAfriqError::PersistenceError(msg) => {
                write!(f, "Session history error: {}", msg)
            }
            LingAfriqError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            LingAfriqError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for LingAfriqError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LingAfriqError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LingAfriqError {
    fn from(err: std::io::Error) -> Self {
        LingAfriqError::IoError(err)
    }
}

impl From<serde_json::Error> for LingAfriqError {
    fn from(err: serde_json::Error) -> Self {
        LingAfriqError::PersistenceError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for LingAfriqError {
    fn from(err: toml::de::Error) -> Self {
        LingAfriqError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for LingAfriqError {
    fn from(err: toml::ser::Error) -> Self {
        LingAfriqError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for LingAfriq operations
pub type Result<T> = std::result::Result<T, LingAfriqError>;

/// Error handling utilities
pub mod error {
    use super::LingAfriqError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &LingAfriqError) -> String {
        match error {
            LingAfriqError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            LingAfriqError::PersistenceError(_) => {
                "Failed to read or write session history. Check disk space and permissions."
                    .to_string()
            }
            LingAfriqError::TuiError(_) => {
                "Terminal error. Make sure you are running in a real terminal.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "lingafriq";
pub const CONFIG_FILE: &str = "lingafriq.toml";
pub const HISTORY_FILE: &str = "history.json";
pub const LOG_FILE: &str = "lingafriq.log";
pub const MAX_HISTORY_ENTRIES: usize = 100;
