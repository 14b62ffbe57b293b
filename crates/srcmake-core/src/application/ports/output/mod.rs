//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `srcmake-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{FileType, Language, Settings};
use crate::error::SrcmakeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `srcmake_adapters::filesystem::LocalFilesystem` (production)
/// - `srcmake_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SrcmakeResult<()>;

    /// Write content to a file, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> SrcmakeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template document retrieval.
///
/// Implemented by:
/// - `srcmake_adapters::template_store::InMemoryStore` (built-in templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Raw text of the template for a resolved `(language, file_type)` pair.
    ///
    /// Fails with `ApplicationError::TemplateLoad` when no such template
    /// exists.
    fn load(&self, language: Language, file_type: FileType) -> SrcmakeResult<String>;
}

/// Port for settings persistence.
///
/// Implemented by:
/// - `srcmake_adapters::settings_file::IniSettingsFile`
#[cfg_attr(test, mockall::automock)]
pub trait SettingsRepository: Send + Sync {
    /// Whether a settings file is present.
    fn exists(&self) -> bool;

    /// Read and parse the settings file.
    fn load(&self) -> SrcmakeResult<Settings>;

    /// Write every setting, replacing the file.
    fn save(&self, settings: &Settings) -> SrcmakeResult<()>;

    /// Where the settings live, for display.
    fn location(&self) -> PathBuf;
}
