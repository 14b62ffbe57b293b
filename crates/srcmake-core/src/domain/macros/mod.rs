//! Macro substitution pipeline.
//!
//! Rendering a template runs four stages in a fixed order:
//!
//! 1. **Substitution.** A [`MacroTable`] is filled by the universal stage and
//!    then by the stage(s) of the request's language (C; C then C++; C#;
//!    nothing extra for Rust). Stages only insert or overwrite entries. The
//!    table is applied to the template in one left-to-right scan.
//! 2. **Whitespace normalisation** ([`whitespace::normalize`]).
//! 3. **Line-ending conversion** ([`whitespace::apply_line_ending`]).
//!
//! A placeholder is a word of `[A-Za-z0-9_]` between two `$` sentinels.
//! Placeholders without an entry are copied through verbatim, and replacement
//! text is never re-scanned.

pub mod c;
pub mod cpp;
pub mod csharp;
pub mod flags;
pub mod universal;
pub mod whitespace;

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::domain::{
    entities::request::GenerationRequest, error::DomainError, value_objects::Language,
};

/// Character delimiting a placeholder on both sides.
pub const SENTINEL: char = '$';

/// What a placeholder turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Plain replacement text.
    Text(String),

    /// Remove the placeholder together with an immediately preceding `": "`
    /// or `":"`, so `class Foo : $INHERITANCE$` becomes `class Foo`.
    EraseWithLeadingColon,
}

impl Replacement {
    fn write_into(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::EraseWithLeadingColon => {
                if out.ends_with(": ") {
                    out.truncate(out.len() - 2);
                } else if out.ends_with(':') {
                    out.pop();
                }
            }
        }
    }
}

/// Placeholder name → replacement, built fresh for every generated file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroTable {
    entries: HashMap<&'static str, Replacement>,
}

impl MacroTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry.
    pub fn insert(&mut self, name: &'static str, replacement: Replacement) {
        self.entries.insert(name, replacement);
    }

    /// Insert or overwrite a plain text entry.
    pub fn text(&mut self, name: &'static str, text: impl Into<String>) {
        self.insert(name, Replacement::Text(text.into()));
    }

    pub fn get(&self, name: &str) -> Option<&Replacement> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Substitute every known placeholder in `text` in a single pass.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find(SENTINEL) {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let known = after
                .find(SENTINEL)
                .map(|end| &after[..end])
                .filter(|word| is_word(word))
                .and_then(|word| self.entries.get(word).map(|r| (word.len(), r)));

            match known {
                Some((len, replacement)) => {
                    replacement.write_into(&mut out);
                    rest = &after[len + 1..];
                }
                None => {
                    out.push(SENTINEL);
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Build the full table for one resolved request.
///
/// # Errors
///
/// Fails only if the compatibility matrix has no extension for the
/// request's file type.
pub fn build_table(
    request: &GenerationRequest,
    now: NaiveDateTime,
) -> Result<MacroTable, DomainError> {
    let mut table = MacroTable::new();
    universal::stage(request, now, &mut table)?;

    match request.language() {
        Language::C => c::stage(request, &mut table)?,
        Language::Cpp => {
            c::stage(request, &mut table)?;
            cpp::stage(request, &mut table)?;
        }
        Language::CSharp => csharp::stage(request, &mut table),
        Language::Rust => {}
    }

    Ok(table)
}

/// Render `template` for `request` at time `now`.
///
/// Blank templates are returned unchanged.
pub fn render(
    request: &GenerationRequest,
    template: &str,
    now: NaiveDateTime,
) -> Result<String, DomainError> {
    if template.trim().is_empty() {
        return Ok(template.to_string());
    }

    let table = build_table(request, now)?;
    let substituted = table.apply(template);
    let normalized = whitespace::normalize(&substituted);

    Ok(whitespace::apply_line_ending(
        &normalized,
        request.settings().line_ending(),
    ))
}


#[cfg(test)]
mod tests {
    use super::test_support::{fixed_now, request};
    use super::*;
    use crate::domain::value_objects::FileType;

    fn table(pairs: &[(&'static str, &str)]) -> MacroTable {
        let mut t = MacroTable::new();
        for (k, v) in pairs {
            t.text(*k, *v);
        }
        t
    }

    // ── scanner ─────────────────────────────────────────────────────────────

    #[test]
    fn replaces_known_tokens() {
        let t = table(&[("NAME", "Foo")]);
        assert_eq!(t.apply("struct $NAME$ {};"), "struct Foo {};");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let t = table(&[("NAME", "Foo")]);
        assert_eq!(t.apply("$NAME$ $OTHER$ $NAME$"), "Foo $OTHER$ Foo");
    }

    #[test]
    fn replacement_text_is_not_rescanned() {
        let t = table(&[("A", "$B$"), ("B", "nope")]);
        assert_eq!(t.apply("$A$"), "$B$");
    }

    #[test]
    fn adjacent_tokens_and_stray_sentinels() {
        let t = table(&[("A", "1"), ("B", "2")]);
        assert_eq!(t.apply("$A$$B$"), "12");
        assert_eq!(t.apply("cost: $5 $A$"), "cost: $5 1");
        assert_eq!(t.apply("$$A$"), "$1");
        assert_eq!(t.apply("end $"), "end $");
        assert_eq!(t.apply("$not a word$A$"), "$not a word1");
    }

    #[test]
    fn erase_swallows_leading_colon() {
        let mut t = MacroTable::new();
        t.insert("INHERITANCE", Replacement::EraseWithLeadingColon);
        assert_eq!(t.apply("class A : $INHERITANCE$\n"), "class A \n");
        assert_eq!(t.apply("class A :$INHERITANCE$"), "class A ");
        assert_eq!(t.apply("class A $INHERITANCE$"), "class A ");
    }

    // ── render ──────────────────────────────────────────────────────────────

    #[test]
    fn blank_template_is_unchanged() {
        let req = request(Language::C, FileType::Main, "main", &[]);
        assert_eq!(render(&req, "  \n\t", fixed_now()).unwrap(), "  \n\t");
        assert_eq!(render(&req, "", fixed_now()).unwrap(), "");
    }

    #[test]
    fn rust_leaves_c_family_placeholders_alone() {
        let req = request(Language::Rust, FileType::Lib, "engine", &["-ns=Game"]);
        let out = render(&req, "// $FILE_NAME$\n$NAMESPACE_BEGIN$\n", fixed_now()).unwrap();
        assert_eq!(out, "// engine.rs\n$NAMESPACE_BEGIN$\n");
    }

    #[test]
    fn cpp_runs_c_stage_first() {
        let req = request(Language::Cpp, FileType::ClassHeader, "Player", &[]);
        let t = build_table(&req, fixed_now()).unwrap();
        assert_eq!(
            t.get("HEADER_GUARD"),
            Some(&Replacement::Text("PLAYER_HPP".into()))
        );
        assert_eq!(
            t.get("INHERITANCE"),
            Some(&Replacement::EraseWithLeadingColon)
        );
    }

    #[test]
    fn windows_line_endings_are_applied_last() {
        let settings = crate::domain::entities::settings::Settings::default();
        let req = GenerationRequest::new(
            Language::C,
            FileType::Source,
            "io",
            vec![],
            &settings,
        )
        .unwrap();
        let out = render(&req, "a  b\n\n\n\nc", fixed_now()).unwrap();
        assert_eq!(out, "a b\r\n\r\nc\r\n");
    }

    #[test]
    fn lineend_flag_overrides_settings() {
        let settings = crate::domain::entities::settings::Settings::default();
        let req = GenerationRequest::new(
            Language::C,
            FileType::Source,
            "io",
            vec!["-l=unix".into()],
            &settings,
        )
        .unwrap();
        assert_eq!(render(&req, "a\nb", fixed_now()).unwrap(), "a\nb\n");
    }
}
