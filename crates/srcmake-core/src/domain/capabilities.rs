//! Language capability registry (the compatibility matrix).
//!
//! # Design Rationale
//!
//! Every fact about a language lives in exactly one [`LanguageDef`]: which
//! file types it accepts, which of them are umbrella (proxy) kinds, which are
//! halves of a split declaration/definition, how file extensions are chosen
//! and whether header guards apply. All queries below are O(n) table lookups
//! over [`LANGUAGE_REGISTRY`]; nothing else in the crate matches on
//! `(Language, FileType)` pairs.
//!
//! # Adding a New Language
//!
//! 1. Add a variant to `Language` in `value_objects.rs`
//! 2. Add a [`LanguageDef`] entry to [`LANGUAGE_REGISTRY`]
//! 3. Add its template documents to `srcmake-adapters/templates`

use crate::domain::error::DomainError;
use crate::domain::value_objects::{FileType, Language};

/// Extension used by every template document.
pub const TEMPLATE_EXT: &str = "src";

/// File types every language accepts.
pub const UNIVERSAL_FILE_TYPES: &[FileType] = &[FileType::Main, FileType::Struct];

/// File types classified as header-like in C/C++.
const HEADER_LIKE: &[FileType] = &[
    FileType::Header,
    FileType::Struct,
    FileType::ClassHeader,
    FileType::SingletonHeader,
    FileType::Singleton03Header,
    FileType::TemplateHeader,
];

/// File types classified as source-like in C/C++.
const SOURCE_LIKE: &[FileType] = &[
    FileType::Source,
    FileType::Main,
    FileType::ClassSource,
    FileType::SingletonSource,
    FileType::Singleton03Source,
    FileType::TemplateSource,
];

// ── Language definitions ─────────────────────────────────────────────────────

/// How a language picks the extension of a generated file.
#[derive(Debug, Clone, Copy)]
pub enum ExtensionRule {
    /// One extension for every file type.
    Fixed(&'static str),

    /// Header-like and source-like files get different extensions.
    /// `overrides` are checked first.
    Split {
        header: &'static str,
        source: &'static str,
        overrides: &'static [(FileType, &'static str)],
    },
}

/// Describes what a language can generate.
#[derive(Debug, Clone, Copy)]
pub struct LanguageDef {
    /// The language this definition describes.
    pub language: Language,

    /// Language-specific file types, in addition to [`UNIVERSAL_FILE_TYPES`].
    pub file_types: &'static [FileType],

    /// Umbrella kinds that expand into a header/source pair.
    ///
    /// Each one MUST have an arm in `proxy_parts`; the integrity test
    /// enforces it.
    pub proxies: &'static [FileType],

    /// Kinds that are one half of a split declaration/definition.
    pub partials: &'static [FileType],

    pub extension: ExtensionRule,

    /// Suffix appended to header guards, or `None` if the language has none.
    pub guard_suffix: Option<&'static str>,
}

/// Single source of truth for language capabilities.
pub static LANGUAGE_REGISTRY: &[LanguageDef] = &[
    LanguageDef {
        language: Language::C,
        file_types: &[FileType::Header, FileType::Source],
        proxies: &[],
        partials: &[],
        extension: ExtensionRule::Split {
            header: "h",
            source: "c",
            overrides: &[],
        },
        guard_suffix: Some("_H"),
    },
    LanguageDef {
        language: Language::Cpp,
        file_types: &[
            FileType::Header,
            FileType::Source,
            FileType::Class,
            FileType::ClassHeader,
            FileType::ClassSource,
            FileType::Template,
            FileType::TemplateHeader,
            FileType::TemplateSource,
            FileType::Singleton,
            FileType::SingletonHeader,
            FileType::SingletonSource,
            FileType::Singleton03,
            FileType::Singleton03Header,
            FileType::Singleton03Source,
        ],
        proxies: &[
            FileType::Class,
            FileType::Singleton,
            FileType::Singleton03,
            FileType::Template,
        ],
        partials: &[
            FileType::ClassHeader,
            FileType::ClassSource,
            FileType::SingletonHeader,
            FileType::SingletonSource,
            FileType::Singleton03Header,
            FileType::Singleton03Source,
            FileType::TemplateHeader,
            FileType::TemplateSource,
        ],
        extension: ExtensionRule::Split {
            header: "hpp",
            source: "cpp",
            // Inline template bodies.
            overrides: &[(FileType::TemplateSource, "inl")],
        },
        guard_suffix: Some("_HPP"),
    },
    LanguageDef {
        language: Language::CSharp,
        file_types: &[
            FileType::Class,
            FileType::Interface,
            FileType::Singleton,
            FileType::MonoBehaviour,
            FileType::ScriptableObject,
        ],
        proxies: &[],
        partials: &[],
        extension: ExtensionRule::Fixed("cs"),
        guard_suffix: None,
    },
    LanguageDef {
        language: Language::Rust,
        file_types: &[FileType::Lib, FileType::Trait],
        proxies: &[],
        partials: &[],
        extension: ExtensionRule::Fixed("rs"),
        guard_suffix: None,
    },
];

/// Header/source expansion of an umbrella kind.
const fn proxy_parts(file_type: FileType) -> Option<(FileType, FileType)> {
    match file_type {
        FileType::Class => Some((FileType::ClassHeader, FileType::ClassSource)),
        FileType::Singleton => Some((FileType::SingletonHeader, FileType::SingletonSource)),
        FileType::Singleton03 => Some((FileType::Singleton03Header, FileType::Singleton03Source)),
        FileType::Template => Some((FileType::TemplateHeader, FileType::TemplateSource)),
        _ => None,
    }
}

// ── Registry lookup API ───────────────────────────────────────────────────────

/// Find the definition for a language.
pub fn find_language(language: Language) -> Option<&'static LanguageDef> {
    LANGUAGE_REGISTRY.iter().find(|def| def.language == language)
}

/// True iff `name` is a usable type/file name: a letter or underscore
/// followed by letters, ASCII digits or underscores.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphabetic() || c.is_ascii_digit() || c == '_')
}

/// Whether `language` can generate `file_type`.
pub fn is_compatible(language: Language, file_type: FileType) -> bool {
    if UNIVERSAL_FILE_TYPES.contains(&file_type) {
        return true;
    }
    find_language(language)
        .map(|def| def.file_types.contains(&file_type))
        .unwrap_or(false)
}

/// Whether `file_type` is an umbrella kind that never maps to a single file.
pub fn is_proxy(language: Language, file_type: FileType) -> bool {
    find_language(language)
        .map(|def| def.proxies.contains(&file_type))
        .unwrap_or(false)
}

/// Whether `file_type` is one half of a split declaration/definition.
pub fn is_partial(language: Language, file_type: FileType) -> bool {
    find_language(language)
        .map(|def| def.partials.contains(&file_type))
        .unwrap_or(false)
}

pub fn is_header_like(file_type: FileType) -> bool {
    HEADER_LIKE.contains(&file_type)
}

pub fn is_source_like(file_type: FileType) -> bool {
    SOURCE_LIKE.contains(&file_type)
}

/// Expand a requested file type into the file types actually emitted.
///
/// Non-proxy types resolve to themselves. Proxies resolve to
/// `[header, source]`, in that order.
pub fn resolve_file_types(
    language: Language,
    file_type: FileType,
) -> Result<Vec<FileType>, DomainError> {
    if !is_proxy(language, file_type) {
        return Ok(vec![file_type]);
    }

    let (header, source) =
        proxy_parts(file_type).ok_or_else(|| DomainError::UnimplementedProxy {
            language: language.to_string(),
            file_type: file_type.to_string(),
        })?;

    Ok(vec![header, source])
}

/// Extension (without the dot) of a generated file.
pub fn file_extension(language: Language, file_type: FileType) -> Result<&'static str, DomainError> {
    let unsupported = || DomainError::UnsupportedExtension {
        language: language.to_string(),
        file_type: file_type.to_string(),
    };

    let def = find_language(language).ok_or_else(unsupported)?;

    match def.extension {
        ExtensionRule::Fixed(ext) => Ok(ext),
        ExtensionRule::Split {
            header,
            source,
            overrides,
        } => {
            if let Some((_, ext)) = overrides.iter().find(|(ft, _)| *ft == file_type) {
                Ok(*ext)
            } else if is_header_like(file_type) {
                Ok(header)
            } else if is_source_like(file_type) {
                Ok(source)
            } else {
                Err(unsupported())
            }
        }
    }
}

/// Header guard for `name`, e.g. `MyClass` in C++ gives `MY_CLASS_HPP`.
///
/// Returns `None` for invalid names and for languages without header guards.
pub fn header_guard(language: Language, name: &str) -> Option<String> {
    let suffix = find_language(language)?.guard_suffix?;
    if !is_valid_name(name) {
        return None;
    }

    let mut guard = String::with_capacity(name.len() + suffix.len() + 4);
    let mut lower_last = false;

    for c in name.trim().chars() {
        if c.is_alphabetic() {
            if lower_last && c.is_uppercase() {
                guard.push('_');
            }
            guard.extend(c.to_uppercase());
            lower_last = c.is_lowercase();
        } else {
            guard.push(c);
            lower_last = false;
        }
    }

    guard.push_str(suffix);
    Some(guard)
}

/// Name of the template document for a resolved pair,
/// e.g. `Cpp_ClassHeader.src`.
pub fn template_name(language: Language, file_type: FileType) -> String {
    format!(
        "{}_{}.{}",
        language.template_stem(),
        file_type.as_str(),
        TEMPLATE_EXT
    )
}

/// Every file type `language` accepts, in declaration order.
pub fn compatible_file_types(language: Language) -> Vec<FileType> {
    FileType::ALL
        .into_iter()
        .filter(|ft| is_compatible(language, *ft))
        .collect()
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registry is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    for language in Language::ALL {
        assert!(
            find_language(language).is_some(),
            "Language {language:?} has no registry entry"
        );
    }

    for def in LANGUAGE_REGISTRY {
        for &proxy in def.proxies {
            assert!(
                def.file_types.contains(&proxy),
                "{:?}: proxy {proxy:?} is not an accepted file type",
                def.language
            );
            let parts = proxy_parts(proxy);
            assert!(
                parts.is_some(),
                "{:?}: proxy {proxy:?} has no expansion",
                def.language
            );
            if let Some((header, source)) = parts {
                assert!(
                    def.partials.contains(&header) && def.partials.contains(&source),
                    "{:?}: halves of {proxy:?} are not marked partial",
                    def.language
                );
            }
        }

        // Every emitted file must have an extension.
        for ft in compatible_file_types(def.language) {
            for resolved in resolve_file_types(def.language, ft).unwrap_or_default() {
                assert!(
                    file_extension(def.language, resolved).is_ok(),
                    "{:?}: {resolved:?} has no extension",
                    def.language
                );
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
