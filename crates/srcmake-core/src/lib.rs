//! srcmake Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for srcmake, a
//! generator of boilerplate source files for C, C++, C# and Rust, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          srcmake-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GenerateService, SettingsService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (TemplateStore, Filesystem, Settings)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     srcmake-adapters (Infrastructure)   │
//! │ (InMemoryStore, LocalFilesystem, Ini)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Compatibility matrix, macro pipeline)  │
//! │         No I/O, no logging              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use srcmake_core::prelude::*;
//!
//! # fn run(store: Box<dyn TemplateStore>, fs: Box<dyn Filesystem>) -> SrcmakeResult<()> {
//! // 1. Describe what to generate
//! let request = GenerationRequest::new(
//!     Language::Cpp,
//!     FileType::Class,
//!     "Player",
//!     vec!["-ns=Game".into(), "-public=Actor".into()],
//!     &Settings::default(),
//! )?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(store, fs);
//! service.generate(&request, Path::new("src"))?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, PlannedFile, RenderedFile, SettingsService,
        ports::{Filesystem, SettingsRepository, TemplateStore},
    };
    pub use crate::domain::{
        FileType, GenerationRequest, Language, LineEnding, SettingKey, Settings, capabilities,
    };
    pub use crate::error::{SrcmakeError, SrcmakeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
