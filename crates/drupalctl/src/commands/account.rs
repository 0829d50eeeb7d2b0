//! Create account command

use anyhow::Result;
use camino::Utf8Path;
use drupalctl_core::DrupalConfig;
use drupalctl_providers::{AccountOptions, Operation};

use crate::cli::CreateAccountArgs;
use crate::output;

pub async fn run(args: CreateAccountArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = DrupalConfig::load(config_path)?;

    let operation = Operation::CreateAccount {
        username: args.username.clone(),
        account: AccountOptions {
            email: args.email,
            password: args.password,
            role: args.role.clone(),
        },
    };

    super::run_operation(&config, args.provider.as_deref(), operation).await?;

    output::success(&format!(
        "Created the {} account with the {} role",
        args.username, args.role
    ));

    Ok(())
}
