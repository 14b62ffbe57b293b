//! Implementation of the `srcmake new` command.
//!
//! Responsibility: turn CLI arguments into a `GenerationRequest`, hand it to
//! the core generate service and report what was written. No business logic
//! lives here.

use tracing::{debug, info, instrument};

use srcmake_adapters::{IniSettingsFile, InMemoryStore, LocalFilesystem};
use srcmake_core::{
    application::{GenerateService, SettingsService},
    domain::GenerationRequest,
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `srcmake new` command.
///
/// 1. Load user settings, creating the file with defaults if needed
/// 2. Validate the request (name, language/file type compatibility)
/// 3. Render and write every file, or print them for `--dry-run`
#[instrument(skip_all, fields(language = %args.language, file_type = %args.file_type, name = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings =
        SettingsService::new(Box::new(IniSettingsFile::new(&config.settings_path))).load_or_default();

    let request = GenerationRequest::new(
        args.language,
        args.file_type,
        args.name,
        args.flags,
        &settings,
    )?;

    debug!(request = %request, args = ?request.args(), "Request validated");

    let store = InMemoryStore::with_builtin()?;
    let service = GenerateService::new(Box::new(store), Box::new(LocalFilesystem::new()));
    let out_dir = args.out_dir.unwrap_or_default();

    if args.dry_run {
        for file in service.preview(&request, &out_dir)? {
            output.header(&format!("── {} ──", file.path.display()))?;
            output.raw(&file.content)?;
        }
        output.info("Dry run: nothing was written")?;
        return Ok(());
    }

    let written = service.generate(&request, &out_dir)?;
    info!(files = written.len(), "Files generated");

    for path in &written {
        output.success(&format!("Created {}", path.display()))?;
    }

    Ok(())
}
