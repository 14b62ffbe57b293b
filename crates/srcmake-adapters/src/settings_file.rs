//! INI-style settings file.
//!
//! ```text
//! #
//! # SrcMake User Settings
//! #
//!
//! [User]
//! author  = "Jane Doe"
//! email   = "jane@example.com"
//! lineend = "unix"
//! ```
//!
//! Loading removes whitespace outside double quotes, skips blank lines and
//! lines starting with `;` or `#`, and requires the first remaining line to
//! be `[User]` (any case). Keys are matched case-insensitively; unknown keys
//! are ignored and an unrecognised `lineend` falls back to `windows`.
//! The file is written with the line ending it configures.

use std::{
    io,
    path::{Path, PathBuf},
};

use srcmake_core::{
    application::{ApplicationError, ports::SettingsRepository},
    domain::{
        LineEnding, Settings,
        common::{remove_unquoted_whitespace, strip_quotes},
    },
    error::SrcmakeResult,
};
use thiserror::Error;
use tracing::{debug, info, instrument};

const SECTION: &str = "[user]";
const HEADER_COMMENT: &str = "#\n# SrcMake User Settings\n#\n\n";

/// Why a settings file could not be read.
#[derive(Debug, Error)]
pub enum SettingsFileError {
    #[error("settings file does not start with a [User] header")]
    MissingSection,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Settings persisted in a single INI file.
#[derive(Debug, Clone)]
pub struct IniSettingsFile {
    path: PathBuf,
}

impl IniSettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse settings file text.
    pub fn parse(text: &str) -> Result<Settings, SettingsFileError> {
        let mut lines = text
            .lines()
            .map(remove_unquoted_whitespace)
            .filter(|l| !(l.is_empty() || l.starts_with(';') || l.starts_with('#')));

        match lines.next() {
            Some(first) if first.eq_ignore_ascii_case(SECTION) => {}
            _ => return Err(SettingsFileError::MissingSection),
        }

        let mut author = String::new();
        let mut email = String::new();
        let mut line_ending = LineEnding::default();

        for line in lines {
            if let Some(value) = value_of(&line, "author=") {
                author = value.to_string();
            } else if let Some(value) = value_of(&line, "email=") {
                email = value.to_string();
            } else if let Some(value) = value_of(&line, "lineend=") {
                line_ending = value.parse().unwrap_or_default();
            }
        }

        Ok(Settings::new(&author, &email, line_ending))
    }

    /// Settings file text for `settings`.
    pub fn render(settings: &Settings) -> String {
        let text = format!(
            "{HEADER_COMMENT}[User]\nauthor  = \"{}\"\nemail   = \"{}\"\nlineend = \"{}\"\n",
            settings.author(),
            settings.email(),
            settings.line_ending(),
        );

        match settings.line_ending() {
            LineEnding::Windows => text.replace('\n', LineEnding::Windows.newline()),
            LineEnding::Unix => text,
        }
    }

    fn load_error(&self, e: SettingsFileError) -> ApplicationError {
        ApplicationError::SettingsLoad {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }

    fn save_error(&self, e: io::Error) -> ApplicationError {
        ApplicationError::SettingsSave {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}

/// The unquoted value of `line` when it starts with `key` (any case).
fn value_of<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.get(..key.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(key))
        .map(|_| strip_quotes(&line[key.len()..]))
}

impl SettingsRepository for IniSettingsFile {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> SrcmakeResult<Settings> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| self.load_error(SettingsFileError::Io(e)))?;
        let settings = Self::parse(&text).map_err(|e| self.load_error(e))?;
        debug!(?settings, "Loaded settings");
        Ok(settings)
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, settings: &Settings) -> SrcmakeResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.save_error(e))?;
            }
        }

        std::fs::write(&self.path, Self::render(settings)).map_err(|e| self.save_error(e))?;
        info!("Saved settings");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
