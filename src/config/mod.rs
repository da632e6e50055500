//! Configuration module for gquery-rs
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "GQUERY_SETTINGS_PATH";

/// Default settings file locations, in lookup order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("gquery.yml"),
        PathBuf::from("config/gquery.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("gquery-rs/settings.yml"));
    }
    paths
}

/// Load settings from an explicit file, the environment, or default locations.
///
/// An explicit path must exist; default locations are skipped when absent.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        info!("Loading settings from: {}", path.display());
        return load_file(path);
    }

    // Check environment variable first
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            return load_file(&path);
        }
        debug!("{} points to missing file {}", SETTINGS_PATH_ENV, path.display());
    }

    for path in default_paths() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            return load_file(&path);
        }
    }

    debug!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

fn load_file(path: &Path) -> Result<Settings> {
    let mut settings = Settings::from_file(path)?;
    settings.merge_env();
    Ok(settings)
}
