//! Cache rebuild command

use anyhow::Result;
use camino::Utf8Path;
use drupalctl_core::DrupalConfig;
use drupalctl_providers::Operation;

use crate::cli::CacheRebuildArgs;
use crate::output;

pub async fn run(args: CacheRebuildArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = DrupalConfig::load(config_path)?;
    super::run_operation(&config, args.provider.as_deref(), Operation::CacheRebuild).await?;

    output::success("The Drupal cache was rebuilt");
    Ok(())
}
