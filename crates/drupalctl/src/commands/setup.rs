//! Environment setup command
//!
//! Prepares the Drupal settings files for an environment: injects the
//! settings.local.php include into settings.php, seeds the local
//! settings file, and injects the configured database connection block.

use anyhow::Result;
use camino::Utf8Path;
use drupalctl_core::DrupalConfig;
use drupalctl_settings::{ensure_file, SettingsPatch, SnippetStore};

use crate::cli::SetupArgs;
use crate::output;

pub async fn run(args: SetupArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = DrupalConfig::load(config_path)?;

    if args.environment != "local" {
        output::warning(&format!(
            "Unsupported environment: {} (only \"local\" is available)",
            args.environment
        ));
        return Ok(());
    }

    apply_local_setup(&config)?;
    output::success("The Drupal project was successfully set up locally");
    Ok(())
}

/// Inject the local settings include and seed settings.local.php with
/// the configured database connection. Safe to re-run: every injection
/// is guarded.
pub(crate) fn apply_local_setup(config: &DrupalConfig) -> Result<()> {
    let settings_path = config.settings_path(false);
    ensure_file(&settings_path, &SnippetStore::settings_base()?)?;
    SettingsPatch::LocalSettingsInclude.apply(&settings_path, &[])?;

    let local_path = config.settings_path(true);
    ensure_file(&local_path, &SnippetStore::local_settings_base()?)?;

    match config.database_opt() {
        Some(database) => {
            SettingsPatch::DatabaseConnection.apply(&local_path, &database.placeholders())?;
        }
        None => {
            output::warning("No database configured; skipping the database settings block");
        }
    }

    Ok(())
}
