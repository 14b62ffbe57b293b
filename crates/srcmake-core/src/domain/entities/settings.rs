//! User settings: author, email and line-ending preference.
//!
//! `Settings` is an immutable value. The persisted file defaults are loaded
//! once, per-invocation flag overrides are merged into a *new* value with
//! [`Settings::with_overrides`], and that snapshot is threaded through the
//! generation pipeline. Nothing mutates settings in place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    common::strip_quotes,
    error::DomainError,
    macros::flags,
    value_objects::LineEnding,
};

// ── SettingKey ───────────────────────────────────────────────────────────────

/// A persisted setting name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Author,
    Email,
    LineEnd,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [Self::Author, Self::Email, Self::LineEnd];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Email => "email",
            Self::LineEnd => "lineend",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = strip_quotes(s.trim()).trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| DomainError::UnknownSetting(s.trim().to_string()))
    }
}

// ── Settings ─────────────────────────────────────────────────────────────────

/// A settings snapshot.
///
/// Construction normalises values: author is trimmed and unquoted, email is
/// additionally lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    author: String,
    email: String,
    #[serde(rename = "lineend")]
    line_ending: LineEnding,
}

impl Settings {
    pub fn new(author: &str, email: &str, line_ending: LineEnding) -> Self {
        Self {
            author: normalize_author(author),
            email: normalize_email(email),
            line_ending,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// The stored value of `key`, as it would be written to disk.
    pub fn value(&self, key: SettingKey) -> &str {
        match key {
            SettingKey::Author => &self.author,
            SettingKey::Email => &self.email,
            SettingKey::LineEnd => self.line_ending.as_str(),
        }
    }

    /// A copy with `key` set to `value`.
    ///
    /// # Errors
    ///
    /// `InvalidSetting` if `key` is `lineend` and `value` is neither
    /// `windows` nor `unix`, or if an author or email still contains a
    /// double quote once its surrounding quotes are removed (the settings
    /// file stores values in double quotes without escaping).
    pub fn with_value(&self, key: SettingKey, value: &str) -> Result<Self, DomainError> {
        let mut next = self.clone();
        match key {
            SettingKey::Author => next.author = storable(key, normalize_author(value))?,
            SettingKey::Email => next.email = storable(key, normalize_email(value))?,
            SettingKey::LineEnd => next.line_ending = strip_quotes(value.trim()).parse()?,
        }
        Ok(next)
    }

    /// A copy with `key` restored to its default.
    pub fn reset(&self, key: SettingKey) -> Self {
        let defaults = Self::default();
        let mut next = self.clone();
        match key {
            SettingKey::Author => next.author = defaults.author,
            SettingKey::Email => next.email = defaults.email,
            SettingKey::LineEnd => next.line_ending = defaults.line_ending,
        }
        next
    }

    /// A copy with every present override applied.
    pub fn with_overrides(&self, overrides: &SettingsOverrides) -> Self {
        Self {
            author: overrides
                .author
                .as_deref()
                .map_or_else(|| self.author.clone(), normalize_author),
            email: overrides
                .email
                .as_deref()
                .map_or_else(|| self.email.clone(), normalize_email),
            line_ending: overrides.line_ending.unwrap_or(self.line_ending),
        }
    }
}

fn storable(key: SettingKey, value: String) -> Result<String, DomainError> {
    if value.contains('"') {
        return Err(DomainError::InvalidSetting {
            key: key.to_string(),
            reason: "values cannot contain '\"'".into(),
        });
    }
    Ok(value)
}

fn normalize_author(value: &str) -> String {
    strip_quotes(value.trim()).trim().to_string()
}

fn normalize_email(value: &str) -> String {
    normalize_author(value).to_lowercase()
}

// ── SettingsOverrides ────────────────────────────────────────────────────────

/// Per-invocation overrides taken from generator flags
/// (`-a=`/`-author=`, `-e=`/`-email=`, `-l=`/`-lineend=`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub author: Option<String>,
    pub email: Option<String>,
    pub line_ending: Option<LineEnding>,
}

impl SettingsOverrides {
    /// Collect overrides from raw flag arguments. The last occurrence of a
    /// flag wins; line-ending values that do not parse are skipped.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        Self {
            author: flags::AUTHOR.last_in(args),
            email: flags::EMAIL.last_in(args),
            line_ending: flags::LINE_END
                .all_in(args)
                .iter()
                .filter_map(|v| v.parse().ok())
                .last(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.email.is_none() && self.line_ending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty_and_windows() {
        let s = Settings::default();
        assert_eq!(s.author(), "");
        assert_eq!(s.email(), "");
        assert_eq!(s.line_ending(), LineEnding::Windows);
    }

    #[test]
    fn constructor_normalises() {
        let s = Settings::new("  \"Jane Doe\" ", " Jane@Example.COM ", LineEnding::Unix);
        assert_eq!(s.author(), "Jane Doe");
        assert_eq!(s.email(), "jane@example.com");
    }

    #[test]
    fn setting_key_parses_case_insensitively() {
        assert_eq!("Author".parse::<SettingKey>().unwrap(), SettingKey::Author);
        assert_eq!(
            "\"LINEEND\"".parse::<SettingKey>().unwrap(),
            SettingKey::LineEnd
        );
        assert!(matches!(
            "colour".parse::<SettingKey>(),
            Err(DomainError::UnknownSetting(_))
        ));
    }

    #[test]
    fn with_value_returns_new_snapshot() {
        let base = Settings::default();
        let next = base.with_value(SettingKey::Email, "A@B.C").unwrap();
        assert_eq!(next.email(), "a@b.c");
        assert_eq!(base.email(), "");
    }

    #[test]
    fn with_value_rejects_bad_line_ending() {
        let err = Settings::default()
            .with_value(SettingKey::LineEnd, "mac")
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidSetting { .. }));
    }

    #[test]
    fn with_value_rejects_embedded_quotes() {
        let s = Settings::default();
        for key in [SettingKey::Author, SettingKey::Email] {
            let err = s.with_value(key, "O\"Neil Smith").unwrap_err();
            assert!(matches!(err, DomainError::InvalidSetting { .. }));
        }
        assert_eq!(
            s.with_value(SettingKey::Author, "\"O'Neil Smith\"").unwrap().author(),
            "O'Neil Smith"
        );
    }

    #[test]
    fn reset_restores_one_key() {
        let s = Settings::new("Jane", "jane@x.io", LineEnding::Unix);
        let r = s.reset(SettingKey::LineEnd);
        assert_eq!(r.line_ending(), LineEnding::Windows);
        assert_eq!(r.author(), "Jane");

        let r = s.reset(SettingKey::Author);
        assert_eq!(r.author(), "");
        assert_eq!(r.line_ending(), LineEnding::Unix);
    }

    #[test]
    fn overrides_from_args() {
        let args = ["-a=\"Bob B\"", "-E=Bob@X.IO", "-ns=Game", "-l=unix"];
        let o = SettingsOverrides::from_args(&args);
        assert_eq!(o.author.as_deref(), Some("Bob B"));
        assert_eq!(o.email.as_deref(), Some("Bob@X.IO"));
        assert_eq!(o.line_ending, Some(LineEnding::Unix));

        let merged = Settings::default().with_overrides(&o);
        assert_eq!(merged.author(), "Bob B");
        assert_eq!(merged.email(), "bob@x.io");
        assert_eq!(merged.line_ending(), LineEnding::Unix);
    }

    #[test]
    fn invalid_line_ending_override_is_ignored() {
        let base = Settings::new("", "", LineEnding::Unix);
        let o = SettingsOverrides::from_args(&["-lineend=mac"]);
        assert!(o.is_empty());
        assert_eq!(base.with_overrides(&o), base);
    }

    #[test]
    fn missing_overrides_keep_file_values() {
        let base = Settings::new("Jane", "jane@x.io", LineEnding::Windows);
        let merged = base.with_overrides(&SettingsOverrides::from_args(&["-v"]));
        assert_eq!(merged, base);
    }
}
