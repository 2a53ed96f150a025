//! File logging.
//!
//! The terminal belongs to the game, so logs go to a file instead of stderr.
//! Filtering follows `RUST_LOG`, defaulting to `info`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "photo-games.log";

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered lines get flushed.
pub fn init(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("install tracing subscriber")?;

    tracing::debug!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}

/// Platform cache directory for log files.
pub fn default_log_dir() -> PathBuf {
    default_log_dir_from(|key| std::env::var_os(key).map(PathBuf::from))
}

fn default_log_dir_from(var: impl Fn(&str) -> Option<PathBuf>) -> PathBuf {
    let base = if cfg!(target_os = "macos") {
        var("HOME").map(|home| home.join("Library").join("Caches"))
    } else if cfg!(target_os = "windows") {
        var("LOCALAPPDATA")
    } else {
        var("XDG_CACHE_HOME").or_else(|| var("HOME").map(|home| home.join(".cache")))
    };
    base.unwrap_or_else(std::env::temp_dir)
        .join("photo-games")
        .join("logs")
}
