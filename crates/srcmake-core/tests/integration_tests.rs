//! Integration tests for srcmake-core.
//!
//! The ports are backed by small in-file fakes so these tests exercise the
//! public API end to end without depending on the adapters crate.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use chrono::{NaiveDate, NaiveDateTime};
use srcmake_core::{
    application::ApplicationError,
    domain::capabilities,
    error::{ErrorCategory, SrcmakeError},
    prelude::*,
};

// ── Fakes ─────────────────────────────────────────────────────────────────────

struct Templates(HashMap<String, String>);

impl Templates {
    fn new(entries: &[(Language, FileType, &str)]) -> Self {
        Self(
            entries
                .iter()
                .map(|(l, f, t)| (capabilities::template_name(*l, *f), (*t).to_string()))
                .collect(),
        )
    }
}

impl TemplateStore for Templates {
    fn load(&self, language: Language, file_type: FileType) -> SrcmakeResult<String> {
        self.0
            .get(&capabilities::template_name(language, file_type))
            .cloned()
            .ok_or_else(|| ApplicationError::template_missing(language, file_type).into())
    }
}

#[derive(Clone, Default)]
struct Disk(Arc<Mutex<HashMap<PathBuf, String>>>);

impl Disk {
    fn read(&self, path: &str) -> Option<String> {
        self.0.lock().unwrap().get(Path::new(path)).cloned()
    }

    fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl Filesystem for Disk {
    fn create_dir_all(&self, _path: &Path) -> SrcmakeResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SrcmakeResult<()> {
        self.0
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.0.lock().unwrap().contains_key(path)
    }
}

#[derive(Clone, Default)]
struct SettingsCell(Arc<Mutex<Option<Settings>>>);

impl SettingsRepository for SettingsCell {
    fn exists(&self) -> bool {
        self.0.lock().unwrap().is_some()
    }

    fn load(&self) -> SrcmakeResult<Settings> {
        self.0.lock().unwrap().clone().ok_or_else(|| {
            ApplicationError::SettingsLoad {
                path: self.location(),
                reason: "absent".into(),
            }
            .into()
        })
    }

    fn save(&self, settings: &Settings) -> SrcmakeResult<()> {
        *self.0.lock().unwrap() = Some(settings.clone());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("settings.ini")
    }
}

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 12, 31)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn cpp_class_with_bases_and_namespace() {
    let store = Templates::new(&[
        (
            Language::Cpp,
            FileType::ClassHeader,
            "#ifndef $HEADER_GUARD$\n#define $HEADER_GUARD$\n\n$INCLUDES$\n$NAMESPACE_BEGIN$\nclass $NAME$ $INHERITANCE$\n{\npublic:\n    $VIRTUAL$ ~$NAME$();\n};\n$NAMESPACE_END$\n#endif // $HEADER_GUARD$\n",
        ),
        (
            Language::Cpp,
            FileType::ClassSource,
            "#include \"$NAME$.$HEADER_EXT$\"\n\n$NAMESPACE_BEGIN$\n$NAME$::~$NAME$() {}\n$NAMESPACE_END$\n",
        ),
    ]);
    let disk = Disk::default();
    let service = GenerateService::new(Box::new(store), Box::new(disk.clone()));

    let request = GenerationRequest::new(
        Language::Cpp,
        FileType::Class,
        "GameActor",
        vec![
            "-ns=World".into(),
            "-i=vector".into(),
            "-pub=Entity".into(),
            "-priv=NonCopyable".into(),
            "-v".into(),
            "-l=unix".into(),
        ],
        &Settings::default(),
    )
    .unwrap();

    let written = service
        .generate_at(&request, Path::new("src"), noon())
        .unwrap();
    assert_eq!(
        written,
        vec![PathBuf::from("src/GameActor.hpp"), PathBuf::from("src/GameActor.cpp")]
    );

    let header = disk.read("src/GameActor.hpp").unwrap();
    assert!(header.starts_with("#ifndef GAME_ACTOR_HPP\n#define GAME_ACTOR_HPP\n"));
    assert!(header.contains("#include<vector>\n"));
    assert!(header.contains("namespace World\n{"));
    assert!(header.contains("class GameActor : public Entity, private NonCopyable\n"));
    assert!(header.contains("virtual ~GameActor();"));
    assert!(!header.contains('\r'));

    let source = disk.read("src/GameActor.cpp").unwrap();
    assert!(source.starts_with("#include \"GameActor.hpp\"\n"));
}

#[test]
fn settings_then_generate_uses_persisted_author() {
    let repo = SettingsCell::default();
    let settings = SettingsService::new(Box::new(repo.clone()));

    // First run creates the file with defaults.
    assert_eq!(settings.load_or_default(), Settings::default());
    assert!(repo.exists());

    settings.set(SettingKey::Author, "Grace Hopper").unwrap();
    settings.set(SettingKey::LineEnd, "unix").unwrap();
    let effective = settings.load_or_default();

    let store = Templates::new(&[(
        Language::Rust,
        FileType::Lib,
        "// $FILE_NAME$ by $AUTHOR$ ($YEAR$)\npub mod $NAME$;",
    )]);
    let disk = Disk::default();
    let service = GenerateService::new(Box::new(store), Box::new(disk.clone()));

    let request =
        GenerationRequest::new(Language::Rust, FileType::Lib, "lib", vec![], &effective).unwrap();
    service.generate_at(&request, Path::new(""), noon()).unwrap();

    assert_eq!(
        disk.read("lib.rs").as_deref(),
        Some("// lib.rs by Grace Hopper (2023)\npub mod lib;\n")
    );
}

#[test]
fn windows_line_endings_by_default() {
    let store = Templates::new(&[(Language::C, FileType::Main, "int main(void)\n{\n}\n")]);
    let disk = Disk::default();
    let service = GenerateService::new(Box::new(store), Box::new(disk.clone()));

    let request =
        GenerationRequest::new(Language::C, FileType::Main, "main", vec![], &Settings::default())
            .unwrap();
    service.generate_at(&request, Path::new("app"), noon()).unwrap();

    assert_eq!(
        disk.read("app/main.c").as_deref(),
        Some("int main(void)\r\n{\r\n}\r\n")
    );
}

#[test]
fn invalid_requests_write_nothing() {
    let cases = [
        (Language::C, FileType::Class, "Foo"),
        (Language::Rust, FileType::Header, "Foo"),
        (Language::Cpp, FileType::Class, "9Lives"),
        (Language::CSharp, FileType::Interface, "has space"),
    ];

    for (language, file_type, name) in cases {
        let err: SrcmakeError =
            GenerationRequest::new(language, file_type, name, vec![], &Settings::default())
                .unwrap_err()
                .into();
        assert!(
            matches!(
                err.category(),
                ErrorCategory::Validation | ErrorCategory::Compatibility
            ),
            "{language} {file_type} {name}"
        );
    }
}

#[test]
fn missing_template_is_not_found_and_keeps_earlier_file() {
    let store = Templates::new(&[(Language::Cpp, FileType::Singleton03Header, "class $NAME$;")]);
    let disk = Disk::default();
    let service = GenerateService::new(Box::new(store), Box::new(disk.clone()));

    let request = GenerationRequest::new(
        Language::Cpp,
        FileType::Singleton03,
        "Log",
        vec![],
        &Settings::default(),
    )
    .unwrap();
    let err = service
        .generate_at(&request, Path::new("out"), noon())
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert_eq!(disk.count(), 1);
    assert!(disk.read("out/Log.hpp").is_some());
}

#[test]
fn every_compatible_pair_resolves_to_named_templates() {
    let mut names = Vec::new();
    for language in Language::ALL {
        for file_type in capabilities::compatible_file_types(language) {
            for resolved in capabilities::resolve_file_types(language, file_type).unwrap() {
                assert!(capabilities::file_extension(language, resolved).is_ok());
                names.push(capabilities::template_name(language, resolved));
            }
        }
    }
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 27);
}
