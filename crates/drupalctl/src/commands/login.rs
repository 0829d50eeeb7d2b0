//! Login command

use anyhow::Result;
use camino::Utf8Path;
use drupalctl_core::DrupalConfig;
use drupalctl_providers::Operation;

use crate::cli::LoginArgs;

pub async fn run(args: LoginArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = DrupalConfig::load(config_path)?;
    super::run_operation(&config, args.provider.as_deref(), Operation::Login).await
}
