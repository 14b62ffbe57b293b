//! Core domain layer for srcmake.
//!
//! This module contains pure logic with no I/O. Template documents, the
//! filesystem and the settings file are reached through ports defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Immutable values**: Settings and requests are never mutated in place
//!
pub mod capabilities;
pub mod common;
pub mod entities;
pub mod error;
pub mod macros;
pub mod value_objects;

pub use entities::{
    request::GenerationRequest,
    settings::{SettingKey, Settings, SettingsOverrides},
};

pub use error::{DomainError, ErrorCategory};

pub use macros::{MacroTable, Replacement, render};

pub use value_objects::{FileType, Language, LineEnding};
