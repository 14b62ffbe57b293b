//! Generator flag grammar.
//!
//! A flag has a short and a long spelling and is written either as a switch
//! (`-v`, `-virtual`) or with a value (`-ns=Game`, `-namespace="Game"`).
//! Matching is case-insensitive. Values are trimmed and one pair of
//! surrounding double quotes is removed. Arguments that match no flag are
//! ignored by every stage.

use crate::domain::common::strip_quotes;

/// Short and long spelling of one flag, without the leading `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub short: &'static str,
    pub long: &'static str,
}

impl FlagSpec {
    pub const fn new(short: &'static str, long: &'static str) -> Self {
        Self { short, long }
    }

    /// The value carried by `arg` if it is `-short=value` or `-long=value`.
    ///
    /// The raw value after `=` must be non-empty.
    pub fn value(&self, arg: &str) -> Option<String> {
        [self.short, self.long].into_iter().find_map(|name| {
            let rest = strip_prefix_ignore_case(arg, '-', name)?;
            let raw = rest.strip_prefix('=')?;
            if raw.is_empty() {
                return None;
            }
            Some(strip_quotes(raw.trim()).to_string())
        })
    }

    /// Whether `arg` is exactly `-short` or `-long`.
    pub fn is_set(&self, arg: &str) -> bool {
        [self.short, self.long]
            .into_iter()
            .any(|name| strip_prefix_ignore_case(arg, '-', name) == Some(""))
    }

    /// Value of the last matching argument.
    pub fn last_in<S: AsRef<str>>(&self, args: &[S]) -> Option<String> {
        args.iter().filter_map(|a| self.value(a.as_ref())).last()
    }

    /// Values of every matching argument, in order.
    pub fn all_in<S: AsRef<str>>(&self, args: &[S]) -> Vec<String> {
        args.iter().filter_map(|a| self.value(a.as_ref())).collect()
    }

    /// Whether any argument sets this switch.
    pub fn any_in<S: AsRef<str>>(&self, args: &[S]) -> bool {
        args.iter().any(|a| self.is_set(a.as_ref()))
    }
}

/// `arg` minus `{lead}{name}`, comparing `name` case-insensitively.
fn strip_prefix_ignore_case<'a>(arg: &'a str, lead: char, name: &str) -> Option<&'a str> {
    let rest = arg.strip_prefix(lead)?;
    let head = rest.get(..name.len())?;
    head.eq_ignore_ascii_case(name).then(|| &rest[name.len()..])
}

// ── Universal ────────────────────────────────────────────────────────────────

pub const AUTHOR: FlagSpec = FlagSpec::new("a", "author");
pub const EMAIL: FlagSpec = FlagSpec::new("e", "email");
pub const LINE_END: FlagSpec = FlagSpec::new("l", "lineend");

// ── C / C++ / C# ─────────────────────────────────────────────────────────────

pub const NAMESPACE: FlagSpec = FlagSpec::new("ns", "namespace");

// ── C / C++ ──────────────────────────────────────────────────────────────────

pub const INCLUDE: FlagSpec = FlagSpec::new("i", "include");

// ── C++ ──────────────────────────────────────────────────────────────────────

pub const VIRTUAL: FlagSpec = FlagSpec::new("v", "virtual");
pub const PUBLIC: FlagSpec = FlagSpec::new("pub", "public");
pub const PROTECTED: FlagSpec = FlagSpec::new("prot", "protected");
pub const PRIVATE: FlagSpec = FlagSpec::new("priv", "private");

// ── C# ───────────────────────────────────────────────────────────────────────

pub const PARTIAL: FlagSpec = FlagSpec::new("pr", "partial");
pub const ABSTRACT: FlagSpec = FlagSpec::new("ab", "abstract");
pub const SEALED: FlagSpec = FlagSpec::new("se", "sealed");
pub const STATIC: FlagSpec = FlagSpec::new("st", "static");
pub const ACCESS: FlagSpec = FlagSpec::new("ac", "access");
pub const USING: FlagSpec = FlagSpec::new("u", "using");
pub const INHERIT: FlagSpec = FlagSpec::new("i", "inherit");
