//! Runtime configuration from the environment.
//!
//! `.env` files are honored (loaded by the binary via `dotenvy`) and every
//! variable is optional:
//!
//! - `PHOTO_GAMES_SEED` - RNG seed for reproducible deals (default: clock-derived)
//! - `PHOTO_GAMES_PAIRS` - Memory pairs, 2..=8 (default: 8)
//! - `PHOTO_GAMES_PHOTO_DIR` - directory of image files replacing the built-in album
//! - `PHOTO_GAMES_LOG_DIR` - where the log file goes (default: platform cache dir)
//! - `PHOTO_GAMES_TICK_MS` - frame interval in milliseconds (default: 16)

use std::env;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::PhotoCatalog;
use crate::types::{DEFAULT_PAIRS, MAX_PAIRS, MIN_PAIRS, TICK_MS};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub pairs: usize,
    pub photo_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub tick_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            pairs: DEFAULT_PAIRS,
            photo_dir: None,
            log_dir: None,
            tick_ms: TICK_MS,
        }
    }
}

impl AppConfig {
    /// Construct configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from any key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = parse::<u32>(&lookup, "PHOTO_GAMES_SEED") {
            config.seed = seed;
        }
        if let Some(pairs) = parse::<usize>(&lookup, "PHOTO_GAMES_PAIRS") {
            config.pairs = pairs.clamp(MIN_PAIRS, MAX_PAIRS);
        }
        if let Some(dir) = non_empty(&lookup, "PHOTO_GAMES_PHOTO_DIR") {
            config.photo_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = non_empty(&lookup, "PHOTO_GAMES_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(tick) = parse::<u32>(&lookup, "PHOTO_GAMES_TICK_MS") {
            config.tick_ms = tick.max(1);
        }

        config
    }

    /// The photo album: the user's directory if configured, else the built-in one.
    pub fn catalog(&self) -> Result<PhotoCatalog> {
        match &self.photo_dir {
            Some(dir) => load_photo_dir(dir),
            None => Ok(PhotoCatalog::builtin()),
        }
    }
}

/// Image files in `dir`, sorted by name.
pub fn load_photo_dir(dir: &Path) -> Result<PhotoCatalog> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("read photo directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    PhotoCatalog::from_files(paths)
        .with_context(|| format!("no usable photos in {}", dir.display()))
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    let value = lookup(key)?.trim().to_string();
    (!value.is_empty()).then_some(value)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
