//! Application layer for srcmake.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, SettingsService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GenerateService, PlannedFile, RenderedFile, SettingsService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, SettingsRepository, TemplateStore};

pub use error::ApplicationError;
