//! Configuration module for the directory search client
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Locate and load settings, falling back to defaults.
///
/// `DIRSEARCH_SETTINGS_PATH` wins over the default search locations.
/// Environment overrides are applied last in every case.
pub fn load() -> Result<Settings> {
    if let Ok(path) = std::env::var("DIRSEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("directory-search/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.is_file() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
