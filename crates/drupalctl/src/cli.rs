//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// drupalctl - Drupal site administration from the command line
#[derive(Parser, Debug)]
#[command(name = "drupalctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to drupalctl.yaml config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Execute an arbitrary command through the provider
    Exec(ExecArgs),

    /// Install a fresh Drupal site
    Install(InstallArgs),

    /// Set up the Drupal settings files for an environment
    Setup(SetupArgs),

    /// Print a one-time login link
    Login(LoginArgs),

    /// Rebuild the Drupal cache
    #[command(visible_alias = "cr")]
    CacheRebuild(CacheRebuildArgs),

    /// Install or uninstall Drupal modules
    Module(ModuleArgs),

    /// Create a Drupal user account
    CreateAccount(CreateAccountArgs),
}

// Config commands

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new drupalctl.yaml
    Init(ConfigInitArgs),

    /// Show resolved configuration
    Show(ConfigShowArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Application root inside the runtime environment
    #[arg(long, default_value = "/var/www/html")]
    pub app_root: String,

    /// Output file path
    #[arg(short, long, default_value = "drupalctl.yaml")]
    pub output: Utf8PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Exec command

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Command tokens passed through to the provider
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub cmd: Vec<String>,

    /// The command provider type
    #[arg(long)]
    pub provider: Option<String>,
}

// Install command

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// The Drupal install profile to use
    #[arg(default_value = "standard")]
    pub profile: String,

    /// The Drupal site name
    #[arg(long)]
    pub site_name: Option<String>,

    /// The Drupal site email address
    #[arg(long)]
    pub site_mail: Option<String>,

    /// The superuser account name
    #[arg(long)]
    pub account_name: Option<String>,

    /// The superuser account password
    #[arg(long)]
    pub account_pass: Option<String>,

    /// The superuser account email address
    #[arg(long)]
    pub account_mail: Option<String>,

    /// Accept all defaults without prompting
    #[arg(short = 'n', long)]
    pub no_interaction: bool,

    /// The command provider type
    #[arg(long)]
    pub provider: Option<String>,
}

// Setup command

#[derive(Args, Debug)]
pub struct SetupArgs {
    /// The environment to set up
    #[arg(default_value = "local")]
    pub environment: String,
}

// Login command

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// The command provider type
    #[arg(long)]
    pub provider: Option<String>,
}

// Cache rebuild command

#[derive(Args, Debug)]
pub struct CacheRebuildArgs {
    /// The command provider type
    #[arg(long)]
    pub provider: Option<String>,
}

// Module command

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleAction {
    /// Enable the modules
    Install,
    /// Uninstall the modules
    Uninstall,
}

#[derive(Args, Debug)]
pub struct ModuleArgs {
    /// The action to execute
    #[arg(value_enum)]
    pub action: ModuleAction,

    /// One or more Drupal modules
    #[arg(required = true)]
    pub modules: Vec<String>,

    /// Run the provider command without confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// The command provider type
    #[arg(long)]
    pub provider: Option<String>,
}

// Create account command

#[derive(Args, Debug)]
pub struct CreateAccountArgs {
    /// The account username
    #[arg(default_value = "dev")]
    pub username: String,

    /// The account user role name
    #[arg(long, default_value = "administrator")]
    pub role: String,

    /// The account user email address
    #[arg(long, default_value = "dev@example.com")]
    pub email: String,

    /// The account user password
    #[arg(long, default_value = "dev")]
    pub password: String,

    /// The command provider type
    #[arg(long)]
    pub provider: Option<String>,
}
