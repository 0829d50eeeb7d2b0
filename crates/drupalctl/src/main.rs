//! drupalctl - Drupal site administration from the command line
//!
//! This is the main entry point for the drupalctl command-line
//! interface.

mod cli;
mod commands;
mod executor;
mod output;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli).await {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Config(args) => commands::config::run(args, config).await,
        Commands::Exec(args) => commands::exec::run(args, config).await,
        Commands::Install(args) => commands::install::run(args, config).await,
        Commands::Setup(args) => commands::setup::run(args, config).await,
        Commands::Login(args) => commands::login::run(args, config).await,
        Commands::CacheRebuild(args) => commands::cache::run(args, config).await,
        Commands::Module(args) => commands::module::run(args, config).await,
        Commands::CreateAccount(args) => commands::account::run(args, config).await,
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
