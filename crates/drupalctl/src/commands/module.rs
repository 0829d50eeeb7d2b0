//! Module install/uninstall command

use anyhow::Result;
use camino::Utf8Path;
use drupalctl_core::exec::CommandOptions;
use drupalctl_core::DrupalConfig;
use drupalctl_providers::Operation;

use crate::cli::{ModuleAction, ModuleArgs};
use crate::output;

pub async fn run(args: ModuleArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = DrupalConfig::load(config_path)?;

    let mut options = CommandOptions::new();
    if args.yes {
        options.push(("yes".to_string(), None));
    }

    let operation = match args.action {
        ModuleAction::Install => Operation::ModuleInstall {
            modules: args.modules.clone().into(),
            options,
        },
        ModuleAction::Uninstall => Operation::ModuleRemove {
            modules: args.modules.clone().into(),
            options,
        },
    };

    super::run_operation(&config, args.provider.as_deref(), operation).await?;

    let verb = match args.action {
        ModuleAction::Install => "installed",
        ModuleAction::Uninstall => "uninstalled",
    };
    output::success(&format!(
        "Successfully {} module(s): {}",
        verb,
        args.modules.join(", ")
    ));

    Ok(())
}
