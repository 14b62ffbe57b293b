//! C placeholders. Also the first half of the C++ stage.

use crate::domain::{
    capabilities,
    entities::request::GenerationRequest,
    error::DomainError,
    macros::{MacroTable, flags},
    value_objects::FileType,
};

pub const HEADER_GUARD: &str = "HEADER_GUARD";
pub const HEADER_EXT: &str = "HEADER_EXT";
pub const SOURCE_EXT: &str = "SOURCE_EXT";
pub const NAMESPACE_BEGIN: &str = "NAMESPACE_BEGIN";
pub const NAMESPACE_END: &str = "NAMESPACE_END";
pub const INCLUDES: &str = "INCLUDES";

pub fn stage(request: &GenerationRequest, table: &mut MacroTable) -> Result<(), DomainError> {
    let language = request.language();

    if let Some(guard) = capabilities::header_guard(language, request.name()) {
        table.text(HEADER_GUARD, guard);
    }
    table.text(
        HEADER_EXT,
        capabilities::file_extension(language, FileType::Header)?,
    );
    table.text(
        SOURCE_EXT,
        capabilities::file_extension(language, FileType::Source)?,
    );

    insert_namespace(request.args(), table);

    let includes: String = flags::INCLUDE
        .all_in(request.args())
        .iter()
        .map(|file| format!("#include<{file}>\n"))
        .collect();
    table.text(INCLUDES, includes);

    Ok(())
}

/// `NAMESPACE_BEGIN`/`NAMESPACE_END` from the last `-ns=` flag, or empty
/// when none is given. Shared with the C# stage.
pub(crate) fn insert_namespace(args: &[String], table: &mut MacroTable) {
    match flags::NAMESPACE.last_in(args).filter(|ns| !ns.trim().is_empty()) {
        Some(ns) => {
            table.text(NAMESPACE_BEGIN, format!("namespace {ns}\n{{"));
            table.text(NAMESPACE_END, "}");
        }
        None => {
            table.text(NAMESPACE_BEGIN, "");
            table.text(NAMESPACE_END, "");
        }
    }
}
