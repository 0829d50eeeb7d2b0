//! Site install command
//!
//! Runs the full install workflow: seeds settings.php from the base
//! template, injects the salt-hash, config-sync, and authorize snippets
//! idempotently, applies the local environment setup, then resolves and
//! executes the provider's site-install command against the configured
//! database.

use anyhow::Result;
use camino::Utf8Path;
use dialoguer::{Confirm, Input};
use drupalctl_core::exec::CommandOptions;
use drupalctl_core::DrupalConfig;
use drupalctl_providers::{default_install_options, Operation};
use drupalctl_settings::{ensure_file, generate_salt_hash, SettingsPatch, SnippetStore};
use std::fs;

use crate::cli::InstallArgs;
use crate::output;

pub async fn run(args: InstallArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = DrupalConfig::load(config_path)?;

    output::header("Installing Drupal");
    output::kv("profile", &args.profile);

    let db_url = config.database()?.url();

    // Seed settings.php and services.yml before injecting anything
    let settings_path = config.settings_path(false);
    ensure_file(&settings_path, &SnippetStore::settings_base()?)?;
    ensure_file(&config.services_path(), &SnippetStore::services_base()?)?;

    setup_salt_hash(&config, args.no_interaction)?;
    setup_config_sync(&config, args.no_interaction)?;
    disable_ui_module_installs(&config, args.no_interaction)?;

    // Local environment setup runs before the provider install
    super::setup::apply_local_setup(&config)?;

    let options = build_install_options(&args)?;
    let operation = Operation::Install {
        db_url,
        profile: args.profile.clone(),
        options,
    };
    super::run_operation(&config, args.provider.as_deref(), operation).await?;

    output::success("Drupal was successfully installed");
    Ok(())
}

/// Inject the hash_salt setting, storing the generated salt outside the
/// web root (in `salt.txt`) unless declined.
fn setup_salt_hash(config: &DrupalConfig, no_interaction: bool) -> Result<()> {
    let salt = generate_salt_hash();

    let store_outside = no_interaction
        || Confirm::new()
            .with_prompt("Store the Drupal salt hash outside the web root?")
            .default(true)
            .interact()?;

    let value = if store_outside {
        fs::write(config.project_root.join("salt.txt"), &salt)?;
        "file_get_contents(dirname(DRUPAL_ROOT) . '/salt.txt');".to_string()
    } else {
        format!("\"{}\";", salt)
    };

    SettingsPatch::HashSalt.apply(
        &config.settings_path(false),
        &[("HASH_SALT".to_string(), value)],
    )?;

    Ok(())
}

/// Point config_sync_directory outside the web root.
fn setup_config_sync(config: &DrupalConfig, no_interaction: bool) -> Result<()> {
    let wanted = no_interaction
        || Confirm::new()
            .with_prompt("Store Drupal configuration outside the web root?")
            .default(true)
            .interact()?;

    if wanted {
        let sync_dir = config.project_root.join("config/default");
        if !sync_dir.exists() {
            fs::create_dir_all(&sync_dir)?;
        }
        SettingsPatch::ConfigSyncDirectory.apply(&config.settings_path(false), &[])?;
    }

    Ok(())
}

/// Disallow module install/update through the admin UI.
fn disable_ui_module_installs(config: &DrupalConfig, no_interaction: bool) -> Result<()> {
    let wanted = no_interaction
        || Confirm::new()
            .with_prompt("Disable installing/updating modules using the Drupal UI?")
            .default(true)
            .interact()?;

    if wanted {
        SettingsPatch::DisallowAuthorizeOperations.apply(&config.settings_path(false), &[])?;
    }

    Ok(())
}

/// Collect the site-install properties: explicit flags win, otherwise
/// each default is offered as a prompt (or accepted as-is with
/// --no-interaction).
fn build_install_options(args: &InstallArgs) -> Result<CommandOptions> {
    let overrides = [
        ("site-name", args.site_name.as_ref()),
        ("site-mail", args.site_mail.as_ref()),
        ("account-name", args.account_name.as_ref()),
        ("account-pass", args.account_pass.as_ref()),
        ("account-mail", args.account_mail.as_ref()),
    ];

    let mut options = CommandOptions::new();
    for (name, default) in default_install_options() {
        let default = default.unwrap_or_default();
        let flag = overrides
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, value)| value.cloned());

        let value = match flag {
            Some(value) => value,
            None if args.no_interaction => default,
            None => {
                let label = name.replace('-', " ");
                Input::<String>::new()
                    .with_prompt(format!("Input the {}", label))
                    .default(default)
                    .interact_text()?
            }
        };
        options.push((name, Some(value)));
    }

    Ok(options)
}
