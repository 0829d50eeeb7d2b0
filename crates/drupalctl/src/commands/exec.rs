//! Arbitrary provider command pass-through

use anyhow::Result;
use camino::Utf8Path;
use drupalctl_core::DrupalConfig;
use drupalctl_providers::Operation;

use crate::cli::ExecArgs;

pub async fn run(args: ExecArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = DrupalConfig::load(config_path)?;

    let command = args.cmd.join(" ").trim().to_string();
    let operation = Operation::Exec {
        command: if command.is_empty() {
            None
        } else {
            Some(command)
        },
    };

    super::run_operation(&config, args.provider.as_deref(), operation).await
}
