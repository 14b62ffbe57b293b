//! The built-in template documents.
//!
//! One document per resolved `(language, file type)` pair, embedded at
//! compile time from `templates/<Language>_<FileType>.src`. Proxy kinds
//! such as C++ `Class` have no document of their own; they are expanded to
//! their header and source halves before a template is looked up.

use srcmake_core::domain::{FileType, Language};

/// Every built-in template as `(language, file type, text)`.
pub static BUILTIN_TEMPLATES: &[(Language, FileType, &str)] = &[
    (
        Language::C,
        FileType::Main,
        include_str!("../templates/C_Main.src"),
    ),
    (
        Language::C,
        FileType::Struct,
        include_str!("../templates/C_Struct.src"),
    ),
    (
        Language::C,
        FileType::Header,
        include_str!("../templates/C_Header.src"),
    ),
    (
        Language::C,
        FileType::Source,
        include_str!("../templates/C_Source.src"),
    ),
    (
        Language::Cpp,
        FileType::Main,
        include_str!("../templates/Cpp_Main.src"),
    ),
    (
        Language::Cpp,
        FileType::Struct,
        include_str!("../templates/Cpp_Struct.src"),
    ),
    (
        Language::Cpp,
        FileType::Header,
        include_str!("../templates/Cpp_Header.src"),
    ),
    (
        Language::Cpp,
        FileType::Source,
        include_str!("../templates/Cpp_Source.src"),
    ),
    (
        Language::Cpp,
        FileType::ClassHeader,
        include_str!("../templates/Cpp_ClassHeader.src"),
    ),
    (
        Language::Cpp,
        FileType::ClassSource,
        include_str!("../templates/Cpp_ClassSource.src"),
    ),
    (
        Language::Cpp,
        FileType::TemplateHeader,
        include_str!("../templates/Cpp_TemplateHeader.src"),
    ),
    (
        Language::Cpp,
        FileType::TemplateSource,
        include_str!("../templates/Cpp_TemplateSource.src"),
    ),
    (
        Language::Cpp,
        FileType::SingletonHeader,
        include_str!("../templates/Cpp_SingletonHeader.src"),
    ),
    (
        Language::Cpp,
        FileType::SingletonSource,
        include_str!("../templates/Cpp_SingletonSource.src"),
    ),
    (
        Language::Cpp,
        FileType::Singleton03Header,
        include_str!("../templates/Cpp_Singleton03Header.src"),
    ),
    (
        Language::Cpp,
        FileType::Singleton03Source,
        include_str!("../templates/Cpp_Singleton03Source.src"),
    ),
    (
        Language::CSharp,
        FileType::Main,
        include_str!("../templates/CSharp_Main.src"),
    ),
    (
        Language::CSharp,
        FileType::Struct,
        include_str!("../templates/CSharp_Struct.src"),
    ),
    (
        Language::CSharp,
        FileType::Class,
        include_str!("../templates/CSharp_Class.src"),
    ),
    (
        Language::CSharp,
        FileType::Interface,
        include_str!("../templates/CSharp_Interface.src"),
    ),
    (
        Language::CSharp,
        FileType::Singleton,
        include_str!("../templates/CSharp_Singleton.src"),
    ),
    (
        Language::CSharp,
        FileType::MonoBehaviour,
        include_str!("../templates/CSharp_MonoBehaviour.src"),
    ),
    (
        Language::CSharp,
        FileType::ScriptableObject,
        include_str!("../templates/CSharp_ScriptableObject.src"),
    ),
    (
        Language::Rust,
        FileType::Main,
        include_str!("../templates/Rust_Main.src"),
    ),
    (
        Language::Rust,
        FileType::Struct,
        include_str!("../templates/Rust_Struct.src"),
    ),
    (
        Language::Rust,
        FileType::Lib,
        include_str!("../templates/Rust_Lib.src"),
    ),
    (
        Language::Rust,
        FileType::Trait,
        include_str!("../templates/Rust_Trait.src"),
    ),
];

/// Built-in text for a resolved pair, if one ships with srcmake.
pub fn builtin(language: Language, file_type: FileType) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(l, f, _)| *l == language && *f == file_type)
        .map(|(_, _, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcmake_core::domain::capabilities;

    #[test]
    fn one_template_per_resolved_pair() {
        let mut expected = Vec::new();
        for language in Language::ALL {
            for file_type in capabilities::compatible_file_types(language) {
                for resolved in capabilities::resolve_file_types(language, file_type).unwrap() {
                    if !expected.contains(&(language, resolved)) {
                        expected.push((language, resolved));
                    }
                }
            }
        }

        assert_eq!(BUILTIN_TEMPLATES.len(), expected.len());
        for (language, file_type) in expected {
            assert!(
                builtin(language, file_type).is_some(),
                "missing {}",
                capabilities::template_name(language, file_type)
            );
        }
    }

    #[test]
    fn proxies_have_no_document() {
        assert!(builtin(Language::Cpp, FileType::Class).is_none());
        assert!(builtin(Language::Cpp, FileType::Template).is_none());
    }

    #[test]
    fn templates_are_not_blank() {
        for (language, file_type, text) in BUILTIN_TEMPLATES {
            assert!(!text.trim().is_empty(), "{language} {file_type}");
        }
    }

    #[test]
    fn header_templates_use_guards() {
        for (language, file_type, text) in BUILTIN_TEMPLATES {
            if matches!(language, Language::C | Language::Cpp)
                && capabilities::is_header_like(*file_type)
            {
                assert!(text.contains("$HEADER_GUARD$"), "{language} {file_type}");
            }
        }
    }
}
