//! Application configuration.
//!
//! [`AppConfig`] is resolved once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Settings file resolution (highest priority first)
//!
//! 1. `--settings FILE`
//! 2. `SRCMAKE_SETTINGS` (also read from a `.env` file)
//! 3. `settings.ini` in the platform config directory
//! 4. `srcmake.ini` in the current directory, when no config directory exists

use std::path::PathBuf;

use anyhow::ensure;

const SETTINGS_FILE: &str = "settings.ini";
const FALLBACK_SETTINGS_FILE: &str = "srcmake.ini";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where user settings are persisted.
    pub settings_path: PathBuf,
}

impl AppConfig {
    /// Resolve configuration.
    ///
    /// `settings_file` is the path from `--settings` or `SRCMAKE_SETTINGS`
    /// (clap merges the two), or `None` to use the default location.
    pub fn load(settings_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let settings_path = match settings_file {
            Some(path) => {
                ensure!(
                    !path.as_os_str().is_empty(),
                    "the settings file path must not be empty"
                );
                ensure!(
                    !path.is_dir(),
                    "the settings file path {} is a directory",
                    path.display()
                );
                path.clone()
            }
            None => Self::default_settings_path(),
        };

        Ok(Self { settings_path })
    }

    /// Path to the default settings file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `srcmake.ini` in the current directory.
    pub fn default_settings_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "srcmake")
            .map(|d| d.config_dir().join(SETTINGS_FILE))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_SETTINGS_FILE))
    }
}
