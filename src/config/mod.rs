//! Configuration module for Vehicle-Match
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "VEHICLE_MATCH_SETTINGS_PATH";

/// Candidate settings locations, in lookup order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("vehicle-match/settings.yml"));
    }
    paths
}

/// Load settings from an explicit path, the environment, or default paths.
///
/// Falls back to defaults when no file exists. Environment overrides are
/// always applied last.
pub fn load(explicit: Option<PathBuf>) -> Result<Settings> {
    if let Some(path) = &explicit {
        if !path.exists() {
            anyhow::bail!("Settings file not found: {}", path.display());
        }
    }

    let env_path = std::env::var(SETTINGS_PATH_ENV).ok().map(PathBuf::from);

    let candidates = explicit
        .into_iter()
        .chain(env_path)
        .chain(default_paths());

    for path in candidates {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
