//! The `GenerationRequest` entity.
//!
//! A request is validated on construction: once it exists its name is a
//! valid identifier and its `(language, file_type)` pair is accepted by the
//! compatibility matrix. Its settings are the *effective* settings, with
//! the `-a`/`-e`/`-l` flag overrides already merged in.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use uuid::Uuid;

use crate::domain::{
    capabilities,
    entities::settings::{Settings, SettingsOverrides},
    error::DomainError,
    value_objects::{FileType, Language},
};

/// One invocation of the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    id: Uuid,
    language: Language,
    file_type: FileType,
    name: String,
    args: Vec<String>,
    settings: Settings,
}

impl GenerationRequest {
    /// Validate and build a request.
    ///
    /// `args` are the raw generator flags; each is trimmed and blank ones are
    /// dropped. `settings` are the file defaults.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if `name` is not an identifier
    /// - `IncompatibleFileType` if the language cannot generate `file_type`
    pub fn new(
        language: Language,
        file_type: FileType,
        name: impl Into<String>,
        args: Vec<String>,
        settings: &Settings,
    ) -> Result<Self, DomainError> {
        let name = name.into();

        if !capabilities::is_valid_name(&name) {
            return Err(DomainError::InvalidName(name));
        }

        if !capabilities::is_compatible(language, file_type) {
            return Err(DomainError::IncompatibleFileType {
                language: language.to_string(),
                file_type: file_type.to_string(),
            });
        }

        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();

        let settings = settings.with_overrides(&SettingsOverrides::from_args(&args));

        Ok(Self {
            id: Uuid::new_v4(),
            language,
            file_type,
            name,
            args,
            settings,
        })
    }

    /// Correlation id for logs; shared by every file of the request.
    pub const fn id(&self) -> Uuid {
        self.id
    }
    pub const fn language(&self) -> Language {
        self.language
    }
    pub const fn file_type(&self) -> FileType {
        self.file_type
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn args(&self) -> &[String] {
        &self.args
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// A copy of this request bound to one resolved file type.
    pub fn for_file_type(&self, file_type: FileType) -> Self {
        Self {
            file_type,
            ..self.clone()
        }
    }

    /// The concrete file types this request emits.
    pub fn resolved_file_types(&self) -> Result<Vec<FileType>, DomainError> {
        capabilities::resolve_file_types(self.language, self.file_type)
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.language, self.file_type, self.name)
    }
}
