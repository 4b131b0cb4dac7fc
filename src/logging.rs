//! File-based logging setup.
//!
//! The terminal is owned by the TUI, so diagnostics go to a log file under
//! the config directory. The `FOLIO_LOG` environment variable accepts the
//! usual env-filter syntax (e.g., `FOLIO_LOG=folio=debug`).

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Name of the log file inside the config directory.
const LOG_FILE: &str = "folio.log";

/// Initializes the global tracing subscriber writing to the log file.
///
/// Returns the log file path so callers can point users at it.
pub fn init() -> Result<PathBuf> {
    let dir = Config::config_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(path)
}
