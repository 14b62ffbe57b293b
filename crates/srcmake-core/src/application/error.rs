//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{FileType, Language, capabilities};
use crate::error::ErrorCategory;

/// Errors that occur while driving ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template document is missing or unreadable.
    #[error("Unable to load template '{name}': {reason}")]
    TemplateLoad { name: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The settings file exists but could not be read or parsed.
    #[error("Unable to load settings from {path}: {reason}")]
    SettingsLoad { path: PathBuf, reason: String },

    /// The settings file could not be written.
    #[error("Unable to save settings to {path}: {reason}")]
    SettingsSave { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// The error a template store reports for a pair it has no document for.
    pub fn template_missing(language: Language, file_type: FileType) -> Self {
        Self::TemplateLoad {
            name: capabilities::template_name(language, file_type),
            reason: "no such template".into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateLoad { name, .. } => vec![
                format!("No built-in template named {name}"),
                "Try: srcmake list to see what can be generated".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no other program has the file locked".into(),
            ],
            Self::SettingsLoad { path, .. } => vec![
                format!("Fix or delete {}", path.display()),
                "The file must start with a [User] section".into(),
            ],
            Self::SettingsSave { path, .. } => vec![
                format!("Check that {} is writable", path.display()),
                "Or point --settings / SRCMAKE_SETTINGS at another file".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateLoad { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::SettingsLoad { .. } | Self::SettingsSave { .. } => ErrorCategory::Configuration,
        }
    }
}
