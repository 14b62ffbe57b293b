//! Domain value objects: Language, FileType, LineEnding.
//!
//! # Design
//!
//! These are pure `Copy` value types with no identity. They hold NO compatibility logic. Which pairs are legal, how proxies
//! expand and which extension applies all live in `capabilities.rs`. This
//! file's only job is to define the types, their string representations, and
//! their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here and extend its `ALL` table
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a capability entry in `capabilities.rs`
//! 4. Add the template documents in `srcmake-adapters/templates`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Language ─────────────────────────────────────────────────────────────────

/// A language srcmake can generate files for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    C,
    Cpp,
    CSharp,
    Rust,
}

impl Language {
    /// Every language, in declaration order.
    pub const ALL: [Language; 4] = [Self::C, Self::Cpp, Self::CSharp, Self::Rust];

    /// Lowercase token used on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Rust => "rust",
        }
    }

    /// Name used when addressing template documents (`Cpp_ClassHeader.src`).
    pub const fn template_stem(&self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cpp => "Cpp",
            Self::CSharp => "CSharp",
            Self::Rust => "Rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(Self::C),
            "cpp" | "c++" => Ok(Self::Cpp),
            "csharp" | "c#" | "cs" => Ok(Self::CSharp),
            "rust" | "rs" => Ok(Self::Rust),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}

// ── FileType ─────────────────────────────────────────────────────────────────

/// The structural kind of file to generate.
///
/// Some variants are only meaningful in one language, and some (C++ `Class`,
/// `Singleton`, `Singleton03`, `Template`) are umbrella kinds that expand into
/// a header/source pair instead of mapping to a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileType {
    // Universal
    Main,
    Struct,

    // C#
    Class,
    Interface,
    Singleton,
    MonoBehaviour,
    ScriptableObject,

    // C
    Header,
    Source,

    // C++
    ClassHeader,
    ClassSource,
    Template,
    TemplateHeader,
    TemplateSource,
    SingletonHeader,
    SingletonSource,
    Singleton03,
    Singleton03Header,
    Singleton03Source,

    // Rust
    Lib,
    Trait,
}

impl FileType {
    /// Every file type, in declaration order.
    pub const ALL: [FileType; 21] = [
        Self::Main,
        Self::Struct,
        Self::Class,
        Self::Interface,
        Self::Singleton,
        Self::MonoBehaviour,
        Self::ScriptableObject,
        Self::Header,
        Self::Source,
        Self::ClassHeader,
        Self::ClassSource,
        Self::Template,
        Self::TemplateHeader,
        Self::TemplateSource,
        Self::SingletonHeader,
        Self::SingletonSource,
        Self::Singleton03,
        Self::Singleton03Header,
        Self::Singleton03Source,
        Self::Lib,
        Self::Trait,
    ];

    /// The variant name, also used when addressing template documents.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Struct => "Struct",
            Self::Class => "Class",
            Self::Interface => "Interface",
            Self::Singleton => "Singleton",
            Self::MonoBehaviour => "MonoBehaviour",
            Self::ScriptableObject => "ScriptableObject",
            Self::Header => "Header",
            Self::Source => "Source",
            Self::ClassHeader => "ClassHeader",
            Self::ClassSource => "ClassSource",
            Self::Template => "Template",
            Self::TemplateHeader => "TemplateHeader",
            Self::TemplateSource => "TemplateSource",
            Self::SingletonHeader => "SingletonHeader",
            Self::SingletonSource => "SingletonSource",
            Self::Singleton03 => "Singleton03",
            Self::Singleton03Header => "Singleton03Header",
            Self::Singleton03Source => "Singleton03Source",
            Self::Lib => "Lib",
            Self::Trait => "Trait",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = DomainError;

    /// Case-insensitive; `-` and `_` are ignored so `class-header`,
    /// `class_header` and `ClassHeader` all name the same variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|ft| ft.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| DomainError::UnknownFileType(s.trim().to_string()))
    }
}

// ── LineEnding ───────────────────────────────────────────────────────────────

/// Newline convention written into generated files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Windows,
    Unix,
}

impl LineEnding {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Unix => "unix",
        }
    }

    pub const fn newline(&self) -> &'static str {
        match self {
            Self::Windows => "\r\n",
            Self::Unix => "\n",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineEnding {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "unix" => Ok(Self::Unix),
            other => Err(DomainError::InvalidSetting {
                key: "lineend".into(),
                reason: format!("expected 'windows' or 'unix', got '{other}'"),
            }),
        }
    }
}
