//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a class" or "set the author".

pub mod generate_service;
pub mod settings_service;

pub use generate_service::{GenerateService, PlannedFile, RenderedFile};
pub use settings_service::SettingsService;
