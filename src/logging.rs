//! Diagnostics logging setup
//!
//! The terminal is owned by the TUI, so tracing output goes to a log file
//! under an XDG-compliant data directory (`~/.local/share/revboard/` on
//! Linux). Logging is best-effort: if the directory or file cannot be set
//! up, the application runs without it.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// Log file name inside the data directory
const LOG_FILE: &str = "revboard.log";

/// Returns the XDG-compliant directory for the log file
///
/// Returns `None` if no home directory can be determined.
fn default_log_dir() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "revboard")?;
    Some(project_dirs.data_local_dir().to_path_buf())
}

/// Initializes tracing with a file writer in the default data directory
///
/// # Returns
/// * `Some(path)` of the log file on success
/// * `None` if the directory or file could not be set up
pub fn init_logging() -> Option<PathBuf> {
    let dir = default_log_dir()?;
    init_logging_in(&dir).ok()
}

/// Initializes tracing with a file writer in the given directory
///
/// Filtering honors `RUST_LOG`, defaulting to `revboard=info`. Calling this
/// more than once per process leaves the first subscriber in place.
pub fn init_logging_in(dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("revboard=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(file))
        .try_init();

    Ok(path)
}
