//! Implementation of the `srcmake list` command.

use serde::Serialize;

use srcmake_core::domain::{Language, capabilities};

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One generatable file type, as shown to the user.
#[derive(Debug, Serialize)]
struct Entry {
    language: String,
    file_type: String,
    /// Extensions of the files written, in order.
    extensions: Vec<String>,
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let languages: Vec<Language> = match args.language {
        Some(language) => vec![language],
        None => Language::ALL.to_vec(),
    };

    let entries = entries(&languages)?;

    match args.format {
        ListFormat::Table => {
            for language in &languages {
                output.header(&format!("{}:", language.template_stem()))?;
                for entry in entries.iter().filter(|e| e.language == language.as_str()) {
                    let files = entry
                        .extensions
                        .iter()
                        .map(|ext| format!(".{ext}"))
                        .collect::<Vec<_>>()
                        .join(" + ");
                    output.print(&format!("  {:<20} {files}", entry.file_type))?;
                }
                output.print("")?;
            }
        }

        // Machine-readable formats bypass `--quiet`.
        ListFormat::List => {
            for entry in &entries {
                output.raw(&format!("{} {}", entry.language, entry.file_type))?;
            }
        }

        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).map_err(|e| {
                CliError::Serialization {
                    message: e.to_string(),
                }
            })?;
            output.raw(&json)?;
        }
    }

    Ok(())
}

fn entries(languages: &[Language]) -> CliResult<Vec<Entry>> {
    let mut entries = Vec::new();

    for &language in languages {
        for file_type in capabilities::compatible_file_types(language) {
            let extensions = capabilities::resolve_file_types(language, file_type)?
                .into_iter()
                .map(|ft| capabilities::file_extension(language, ft).map(str::to_string))
                .collect::<Result<Vec<_>, _>>()?;

            entries.push(Entry {
                language: language.to_string(),
                file_type: file_type.to_string(),
                extensions,
            });
        }
    }

    Ok(entries)
}
