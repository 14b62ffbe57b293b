//! Infrastructure adapters for srcmake.
//!
//! This crate implements the ports defined in `srcmake-core::application::ports`.
//! It contains all I/O: the local filesystem, the settings file and the
//! built-in template documents.

pub mod builtin_templates;
pub mod filesystem;
pub mod settings_file;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use settings_file::IniSettingsFile;
pub use template_store::InMemoryStore;
