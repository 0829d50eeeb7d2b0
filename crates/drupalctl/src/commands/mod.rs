//! CLI command implementations

pub mod account;
pub mod cache;
pub mod config;
pub mod exec;
pub mod install;
pub mod login;
pub mod module;
pub mod setup;

use anyhow::Result;
use drupalctl_core::DrupalConfig;
use drupalctl_providers::{create_provider, CommandResolver, Operation};

use crate::executor;

/// Build a command resolver for the configured (or overridden) provider.
pub(crate) fn build_resolver(
    config: &DrupalConfig,
    provider: Option<&str>,
) -> Result<CommandResolver> {
    let key = provider.unwrap_or_else(|| config.provider());
    let environment = config.environment();
    let provider = create_provider(key, environment)?;
    Ok(CommandResolver::new(
        provider,
        environment.exec_option_pairs(),
    ))
}

/// Resolve a provider operation and execute the rendered commands
/// sequentially in the application root.
pub(crate) async fn run_operation(
    config: &DrupalConfig,
    provider: Option<&str>,
    operation: Operation,
) -> Result<()> {
    let resolver = build_resolver(config, provider)?;
    let commands = resolver.resolve(operation);
    executor::run_all(&commands, config.environment().app_root.as_path()).await
}
