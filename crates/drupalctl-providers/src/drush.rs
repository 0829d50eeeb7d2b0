//! Drush command provider implementation
//!
//! Translates site-administration intents into drush invocations, each
//! bound to the application root via the `--root` option. Subcommand
//! mapping:
//!
//! - login           -> `uli`
//! - cache rebuild   -> `cr`
//! - module install  -> `en` + `cr`
//! - module remove   -> `pmu` + `cr`
//! - create account  -> `ucrt` + `urol`
//! - site install    -> `site-install`

use camino::Utf8PathBuf;
use drupalctl_core::exec::{CommandOptions, ExecCommand};

use crate::traits::{AccountOptions, CommandProvider};

/// The drush executable name
const DRUSH: &str = "drush";

/// Drush command provider
///
/// Stateless beyond the application root it was constructed with; one
/// instance serves one resolver call's batch of operations.
#[derive(Debug)]
pub struct DrushProvider {
    /// The drush working root directory
    root: Utf8PathBuf,
}

impl DrushProvider {
    /// Create a drush provider bound to an application root
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// A bare drush invocation bound to the application root
    fn drush(&self) -> ExecCommand {
        ExecCommand::new(DRUSH).option("root", self.root.as_str())
    }

    /// A drush invocation for the given subcommand
    fn subcommand(&self, command: &str) -> ExecCommand {
        self.drush().arg(command)
    }
}

/// Default site properties applied by `install` for any option the
/// caller did not supply.
pub fn default_install_options() -> CommandOptions {
    vec![
        ("site-name".to_string(), Some("Drupal Project".to_string())),
        ("site-mail".to_string(), Some("admin@example.com".to_string())),
        ("account-name".to_string(), Some("admin".to_string())),
        ("account-pass".to_string(), Some("admin".to_string())),
        (
            "account-mail".to_string(),
            Some("admin@example.com".to_string()),
        ),
    ]
}

impl CommandProvider for DrushProvider {
    fn name(&self) -> &'static str {
        "drush"
    }

    fn login(&self) -> ExecCommand {
        self.subcommand("uli")
    }

    fn cache_rebuild(&self) -> ExecCommand {
        self.subcommand("cr")
    }

    fn exec(&self, command: Option<&str>) -> ExecCommand {
        match command {
            Some(command) => self.subcommand(command),
            None => self.drush(),
        }
    }

    fn module_install(&self, modules: &[String], options: &CommandOptions) -> Vec<ExecCommand> {
        vec![
            self.subcommand("en")
                .options(options.clone())
                .args(modules.to_vec()),
            self.subcommand("cr"),
        ]
    }

    fn module_remove(&self, modules: &[String], options: &CommandOptions) -> Vec<ExecCommand> {
        vec![
            self.subcommand("pmu")
                .options(options.clone())
                .args(modules.to_vec()),
            self.subcommand("cr"),
        ]
    }

    fn create_account(&self, username: &str, account: &AccountOptions) -> Vec<ExecCommand> {
        vec![
            self.subcommand("ucrt")
                .arg(username)
                .option("mail", &account.email)
                .option("password", &account.password),
            self.subcommand("urol")
                .arg(&account.role)
                .option("name", username),
        ]
    }

    fn install(&self, db_url: &str, profile: &str, options: &CommandOptions) -> ExecCommand {
        self.subcommand("site-install")
            .arg(profile)
            .options(options.clone())
            .option("db-url", db_url)
            .config_options(default_install_options())
    }
}
