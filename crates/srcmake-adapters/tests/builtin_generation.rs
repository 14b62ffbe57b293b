//! Every built-in template rendered through the real adapters.

use std::path::Path;

use srcmake_adapters::{InMemoryStore, LocalFilesystem, MemoryFilesystem};
use srcmake_core::{domain::capabilities, prelude::*};

fn service_with(fs: impl Filesystem + 'static) -> GenerateService {
    GenerateService::new(
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(fs),
    )
}

fn unix() -> Settings {
    Settings::new("Test Author", "test@example.com", LineEnding::Unix)
}

#[test]
fn every_compatible_pair_renders_without_leftover_placeholders() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    for language in Language::ALL {
        for file_type in capabilities::compatible_file_types(language) {
            let out_dir = format!("out/{language}/{file_type}");
            let request =
                GenerationRequest::new(language, file_type, "Sample", vec![], &unix()).unwrap();

            let written = service.generate(&request, Path::new(&out_dir)).unwrap();
            assert!(!written.is_empty());

            for path in written {
                let text = fs.read_file(&path).unwrap();
                assert!(!text.contains('$'), "{}: {text}", path.display());
                assert!(text.ends_with('\n'));
                assert!(!text.ends_with("\n\n"));
            }
        }
    }
}

#[test]
fn cpp_class_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("src");
    let service = service_with(LocalFilesystem::new());

    let request = GenerationRequest::new(
        Language::Cpp,
        FileType::Class,
        "MyClass",
        vec!["-ns=Game".into(), "-pub=Base".into(), "-v".into()],
        &unix(),
    )
    .unwrap();
    service.generate(&request, &out).unwrap();

    let header = std::fs::read_to_string(out.join("MyClass.hpp")).unwrap();
    assert!(header.contains("#ifndef MY_CLASS_HPP\n"));
    assert!(header.contains("namespace Game\n{\nclass MyClass : public Base\n{"));
    assert!(header.contains("\tvirtual ~MyClass();"));
    assert!(header.contains("// Author: Test Author\n"));

    let source = std::fs::read_to_string(out.join("MyClass.cpp")).unwrap();
    assert!(source.contains("#include \"MyClass.hpp\"\n"));
    assert!(source.contains("MyClass::~MyClass()"));
}

#[test]
fn cpp_class_without_bases_has_no_dangling_colon() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let request =
        GenerationRequest::new(Language::Cpp, FileType::Class, "Plain", vec![], &unix()).unwrap();
    service.generate(&request, Path::new("")).unwrap();

    let header = fs.read_file(Path::new("Plain.hpp")).unwrap();
    assert!(header.contains("class Plain\n{"));
    assert!(header.contains("\t~Plain();"));
}

#[test]
fn template_pair_uses_inline_extension() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let request =
        GenerationRequest::new(Language::Cpp, FileType::Template, "Vec3", vec![], &unix())
            .unwrap();
    service.generate(&request, Path::new("")).unwrap();

    let header = fs.read_file(Path::new("Vec3.hpp")).unwrap();
    assert!(header.contains("#include \"Vec3.inl\""));
    assert!(fs.read_file(Path::new("Vec3.inl")).is_some());
}

#[test]
fn csharp_class_with_modifiers_and_windows_endings() {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let request = GenerationRequest::new(
        Language::CSharp,
        FileType::Class,
        "Enemy",
        vec![
            "-ac=public".into(),
            "-st".into(),
            "-ab".into(),
            "-pr".into(),
            "-u=System.Collections".into(),
            "-i=IDamageable".into(),
            "-l=windows".into(),
        ],
        &unix(),
    )
    .unwrap();
    service.generate(&request, Path::new("")).unwrap();

    let text = fs.read_file(Path::new("Enemy.cs")).unwrap();
    assert!(text.contains("using System;\r\nusing System.Collections;\r\n"));
    assert!(text.contains("public abstract partial class Enemy : IDamageable\r\n{\r\n}\r\n"));
    assert!(!text.replace("\r\n", "").contains('\n'));
}

fn render_csharp(file_type: FileType, name: &str, args: &[&str]) -> String {
    let fs = MemoryFilesystem::new();
    let service = service_with(fs.clone());

    let args = args.iter().map(|a| a.to_string()).collect();
    let request = GenerationRequest::new(Language::CSharp, file_type, name, args, &unix()).unwrap();
    service.generate(&request, Path::new("")).unwrap();

    fs.read_file(Path::new(&format!("{name}.cs"))).unwrap()
}

#[test]
fn csharp_singleton_honours_modifier_flags() {
    let text = render_csharp(FileType::Singleton, "Engine", &["-st", "-pr"]);
    assert!(text.contains("\nstatic partial class Engine\n{"), "{text}");

    let text = render_csharp(FileType::Singleton, "Engine", &["-ac=public", "-se"]);
    assert!(text.contains("\npublic sealed class Engine\n{"), "{text}");
}

#[test]
fn csharp_singleton_without_flags_has_bare_declaration() {
    let text = render_csharp(FileType::Singleton, "Engine", &[]);
    assert!(text.contains("\nclass Engine\n{"), "{text}");
    assert!(text.contains("Lazy<Engine>"));
    assert!(!text.contains('$'));
}

#[test]
fn csharp_interface_and_struct_accept_partial() {
    let text = render_csharp(FileType::Interface, "IFoo", &["-pr"]);
    assert!(text.contains("\npartial interface IFoo\n{"), "{text}");

    let text = render_csharp(FileType::Struct, "Point", &["-ac=public", "-pr"]);
    assert!(text.contains("\npublic partial struct Point\n{"), "{text}");
}
