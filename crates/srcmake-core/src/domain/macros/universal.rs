//! Placeholders shared by every language.

use chrono::NaiveDateTime;

use crate::domain::{
    capabilities, entities::request::GenerationRequest, error::DomainError, macros::MacroTable,
};

pub const NAME: &str = "NAME";
pub const FILE_EXT: &str = "FILE_EXT";
pub const FILE_NAME: &str = "FILE_NAME";
pub const DATE: &str = "DATE";
pub const YEAR: &str = "YEAR";
pub const MONTH: &str = "MONTH";
pub const TIME: &str = "TIME";
pub const DATETIME: &str = "DATETIME";
pub const AUTHOR: &str = "AUTHOR";
pub const EMAIL: &str = "EMAIL";

/// Name, file name, timestamp and author placeholders.
///
/// Author and email come from the request's effective settings, which
/// already carry the `-a`/`-e` flag overrides.
pub fn stage(
    request: &GenerationRequest,
    now: NaiveDateTime,
    table: &mut MacroTable,
) -> Result<(), DomainError> {
    let ext = capabilities::file_extension(request.language(), request.file_type())?;
    let settings = request.settings();

    table.text(NAME, request.name());
    table.text(FILE_EXT, ext);
    table.text(FILE_NAME, format!("{}.{ext}", request.name()));
    table.text(DATE, now.format("%Y-%m-%d").to_string());
    table.text(YEAR, now.format("%Y").to_string());
    table.text(MONTH, now.format("%B").to_string());
    table.text(TIME, now.format("%H:%M").to_string());
    table.text(DATETIME, now.format("%Y-%m-%d %H:%M:%S").to_string());
    table.text(AUTHOR, settings.author());
    table.text(EMAIL, settings.email());

    Ok(())
}
