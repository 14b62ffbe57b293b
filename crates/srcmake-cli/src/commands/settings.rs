//! Implementation of `srcmake set`, `srcmake reset` and `srcmake settings`.

use tracing::instrument;

use srcmake_adapters::IniSettingsFile;
use srcmake_core::{application::SettingsService, domain::Settings};

use crate::{
    cli::{ResetArgs, SetArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

fn service(config: &AppConfig) -> SettingsService {
    SettingsService::new(Box::new(IniSettingsFile::new(&config.settings_path)))
}

/// `srcmake set <setting> <value>`
#[instrument(skip_all, fields(setting = %args.setting))]
pub fn set(args: SetArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let updated = service(&config).set(args.setting, &args.value)?;
    output.success(&format!(
        "{} = \"{}\"",
        args.setting,
        updated.value(args.setting)
    ))?;
    Ok(())
}

/// `srcmake reset <setting>`
#[instrument(skip_all, fields(setting = %args.setting))]
pub fn reset(args: ResetArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let updated = service(&config).reset(args.setting)?;
    output.success(&format!(
        "{} reset to \"{}\"",
        args.setting,
        updated.value(args.setting)
    ))?;
    Ok(())
}

/// `srcmake settings`
pub fn show(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = service(&config);
    let settings = service.current()?;

    output.header(&format!("Settings ({})", service.location().display()))?;
    output.raw(&render(&settings)?)?;
    Ok(())
}

fn render(settings: &Settings) -> CliResult<String> {
    toml::to_string(settings).map_err(|e| CliError::Serialization {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcmake_core::domain::LineEnding;

    #[test]
    fn settings_render_as_toml() {
        let text = render(&Settings::new("Jane Doe", "jane@example.com", LineEnding::Unix)).unwrap();
        assert!(text.contains("author = \"Jane Doe\""));
        assert!(text.contains("email = \"jane@example.com\""));
        assert!(text.contains("lineend = \"unix\""));
    }
}
