// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (requests are cloned per resolved file type)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Request Errors (bad user input)
    // ========================================================================
    #[error("invalid name '{0}': must start with a letter or underscore and contain only letters, digits and underscores")]
    InvalidName(String),

    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("unknown file type '{0}'")]
    UnknownFileType(String),

    #[error("unknown setting '{0}'")]
    UnknownSetting(String),

    #[error("invalid value for setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    // ========================================================================
    // Compatibility Errors
    // ========================================================================
    #[error("language '{language}' does not support file type '{file_type}'")]
    IncompatibleFileType { language: String, file_type: String },

    #[error("file type '{file_type}' has no '{language}' file extension")]
    UnsupportedExtension { language: String, file_type: String },

    // ========================================================================
    // Contract Violations (incomplete compatibility matrix)
    // ========================================================================
    #[error("proxy file type '{file_type}' has no expansion for '{language}'")]
    UnimplementedProxy { language: String, file_type: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName(_) => vec![
                "The name is used for the file name and the generated type name".into(),
                "Examples of valid names: Player, _internal, Vec3".into(),
            ],
            Self::UnknownLanguage(_) => vec![
                "Supported languages: c, cpp (c++), csharp (c#, cs), rust (rs)".into(),
            ],
            Self::UnknownFileType(_) => vec![
                "Try: srcmake list to see the file types of every language".into(),
            ],
            Self::UnknownSetting(_) => vec!["Known settings: author, email, lineend".into()],
            Self::InvalidSetting { key, .. } if key == "lineend" => {
                vec!["lineend must be 'windows' or 'unix'".into()]
            }
            Self::IncompatibleFileType { language, .. } => vec![
                format!("Try: srcmake list {language} to see what {language} supports"),
                "main and struct are available for every language".into(),
            ],
            Self::UnimplementedProxy { .. } | Self::UnsupportedExtension { .. } => vec![
                "This is a bug in srcmake's compatibility table, please report it".into(),
            ],
            _ => vec!["Run srcmake --help for usage".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName(_)
            | Self::UnknownLanguage(_)
            | Self::UnknownFileType(_)
            | Self::UnknownSetting(_)
            | Self::InvalidSetting { .. } => ErrorCategory::Validation,
            Self::IncompatibleFileType { .. } => ErrorCategory::Compatibility,
            Self::UnsupportedExtension { .. } | Self::UnimplementedProxy { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}
