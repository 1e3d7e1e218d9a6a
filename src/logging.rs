//! Logging setup
//!
//! Initializes a `tracing` subscriber writing to a log file in the data
//! directory. Stdout belongs to the TUI, so nothing is ever logged there.
//! Verbosity follows `RUST_LOG` when set, defaulting to `info`.

use crate::{LingAfriqError, Result, APP_NAME, LOG_FILE};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Get the standard log file path
/// Uses $DATA_HOME/lingafriq/lingafriq.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        LingAfriqError::LoggingError("Unable to determine data directory".to_string())
    })?;
    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Install the global tracing subscriber.
///
/// Must be called at most once per process; calling it again returns an
/// error from the subscriber registry.
pub fn init() -> Result<()> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LingAfriqError::LoggingError(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| {
            LingAfriqError::LoggingError(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LingAfriqError::LoggingError(format!("Failed to set subscriber: {}", e)))?;

    tracing::info!("logging initialized at {}", path.display());
    Ok(())
}
