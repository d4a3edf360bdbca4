//! File-backed tracing setup.
//!
//! The TUI owns the terminal, so diagnostics go to a log file under the
//! cache directory instead of stderr. The filter defaults to `warn` and can
//! be overridden with `SAYT_LOG` (standard `tracing` env-filter syntax).

use std::fs;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_ENV: &str = "SAYT_LOG";
const LOG_FILE: &str = "sayt.log";

/// Install the global subscriber. Call once, before the terminal is taken
/// over.
pub fn init() -> Result<()> {
    let cache_dir = app_dirs::get_cache_dir()?;
    fs::create_dir_all(&cache_dir)
        .with_context(|| format!("failed to create cache directory {}", cache_dir.display()))?;

    let log_path = cache_dir.join(LOG_FILE);
    let file = fs::File::options()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;

    Ok(())
}
