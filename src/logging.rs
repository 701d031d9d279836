//! File logging
//!
//! The terminal belongs to the UI, so tracing output goes to a log file in
//! the user's data directory.

use crate::{FolioError, Result, APP_NAME, LOG_FILE};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Standard log file location: $DATA_HOME/gv-folio/gv-folio.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| FolioError::Logging("Unable to determine data directory".to_string()))?;
    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Build the filter: RUST_LOG wins, then the configured level for this crate
pub fn build_filter(level: &str, verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "gv_folio=debug,info".to_string()
    } else {
        format!("gv_folio={},warn", level)
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber, appending to `path`
pub fn init_file_logger(path: &Path, level: &str, verbose: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::registry()
        .with(build_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| FolioError::Logging(e.to_string()))
}
