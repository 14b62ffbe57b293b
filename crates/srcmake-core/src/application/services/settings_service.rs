//! Settings Service - load, update and reset persisted user settings.
//!
//! Each operation is a single read-modify-write with no locking; concurrent
//! invocations may overwrite each other.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::ports::SettingsRepository,
    domain::{SettingKey, Settings},
    error::SrcmakeResult,
};

/// Service for settings operations.
pub struct SettingsService {
    repository: Box<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repository: Box<dyn SettingsRepository>) -> Self {
        Self { repository }
    }

    /// Where settings are persisted.
    pub fn location(&self) -> PathBuf {
        self.repository.location()
    }

    /// Settings for a generation run.
    ///
    /// A missing file is created with defaults. A file that cannot be loaded
    /// is not fatal: a warning is logged and defaults are used.
    #[instrument(skip_all, fields(path = %self.repository.location().display()))]
    pub fn load_or_default(&self) -> Settings {
        if !self.repository.exists() {
            let defaults = Settings::default();
            match self.repository.save(&defaults) {
                Ok(()) => info!("Created settings file with defaults"),
                Err(e) => warn!(error = %e, "Unable to create settings file"),
            }
            return defaults;
        }

        self.repository.load().unwrap_or_else(|e| {
            warn!(error = %e, "Unable to load user settings, defaults will be used");
            Settings::default()
        })
    }

    /// Current settings; defaults if no file exists yet.
    pub fn current(&self) -> SrcmakeResult<Settings> {
        if self.repository.exists() {
            self.repository.load()
        } else {
            Ok(Settings::default())
        }
    }

    /// Set one setting and persist the result.
    #[instrument(skip_all, fields(key = %key))]
    pub fn set(&self, key: SettingKey, value: &str) -> SrcmakeResult<Settings> {
        let updated = self.current()?.with_value(key, value)?;
        self.repository.save(&updated)?;
        info!(value = updated.value(key), "Setting updated");
        Ok(updated)
    }

    /// Restore one setting to its default and persist the result.
    #[instrument(skip_all, fields(key = %key))]
    pub fn reset(&self, key: SettingKey) -> SrcmakeResult<Settings> {
        let updated = self.current()?.reset(key);
        self.repository.save(&updated)?;
        info!("Setting reset");
        Ok(updated)
    }
}
