//! Tracing setup for the filepeek binary.
//!
//! The interactive TUI owns the terminal, so its logs go to a file.
//! Headless commands log to stderr.
//!
//! Usage:
//!   filepeek --debug ...               # Debug logging
//!   RUST_LOG=filepeek_tui=debug ...    # Fine-grained log control

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

/// Where log lines are written.
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Default log file location for the TUI.
pub fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("filepeek")
        .join("filepeek.log")
}

/// Level used when `RUST_LOG` is unset.
fn fallback_level(debug: bool, target: &LogTarget) -> &'static str {
    match (debug, target) {
        (true, _) => "debug",
        (false, LogTarget::Stderr) => "warn",
        (false, LogTarget::File(_)) => "info",
    }
}

fn filter(debug: bool, target: &LogTarget) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_level(debug, target)))
}

/// Initialize tracing for the chosen target.
pub fn init(debug: bool, target: &LogTarget) -> Result<()> {
    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter(debug, target))
            .with_writer(std::io::stderr)
            .with_target(debug)
            .compact()
            .try_init()
            .map_err(|err| eyre!(err)),
        LogTarget::File(path) => init_file(debug, target, path),
    }
}

fn init_file(debug: bool, target: &LogTarget, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(debug, target))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| eyre!(err))
}
