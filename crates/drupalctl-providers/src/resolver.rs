//! Command resolver
//!
//! Dispatches a provider [`Operation`] to the bound provider, merges
//! the environment-wide execution defaults into each resulting command,
//! and renders the ordered sequence of literal command-line strings.
//! Resolution is pure rendering: execution (and the decision whether a
//! failed command aborts the rest of a sequence) belongs to the caller.

use drupalctl_core::exec::{CommandOptions, ExecCommand};
use tracing::debug;

use crate::traits::{AccountOptions, CommandProvider};

/// One or more module identifiers.
///
/// Accepts a single name or a list; a scalar normalizes to a
/// one-element sequence before argument building.
#[derive(Debug, Clone)]
pub struct Modules(Vec<String>);

impl Modules {
    /// The normalized module names
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of modules
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Modules {
    fn from(module: &str) -> Self {
        Self(vec![module.to_string()])
    }
}

impl From<String> for Modules {
    fn from(module: String) -> Self {
        Self(vec![module])
    }
}

impl From<Vec<String>> for Modules {
    fn from(modules: Vec<String>) -> Self {
        Self(modules)
    }
}

/// A provider operation to resolve
#[derive(Debug, Clone)]
pub enum Operation {
    /// Print a one-time login URL
    Login,

    /// Rebuild the application cache
    CacheRebuild,

    /// Pass an arbitrary sub-command through to the underlying tool
    Exec { command: Option<String> },

    /// Enable modules, then rebuild the cache
    ModuleInstall {
        modules: Modules,
        options: CommandOptions,
    },

    /// Uninstall modules, then rebuild the cache
    ModuleRemove {
        modules: Modules,
        options: CommandOptions,
    },

    /// Create a user account, then assign its role
    CreateAccount {
        username: String,
        account: AccountOptions,
    },

    /// Install the application
    Install {
        db_url: String,
        profile: String,
        options: CommandOptions,
    },
}

/// Resolves provider operations to literal command-line strings
pub struct CommandResolver {
    provider: Box<dyn CommandProvider>,
    exec_options: CommandOptions,
}

impl CommandResolver {
    /// Create a resolver for a provider instance and the environment's
    /// global execution option defaults.
    pub fn new(provider: Box<dyn CommandProvider>, exec_options: CommandOptions) -> Self {
        Self {
            provider,
            exec_options,
        }
    }

    /// Invoke the operation on the bound provider and render each
    /// resulting command, in the provider's declared order, with the
    /// environment defaults merged at lower precedence.
    pub fn resolve(&self, operation: Operation) -> Vec<String> {
        let commands: Vec<ExecCommand> = match operation {
            Operation::Login => vec![self.provider.login()],
            Operation::CacheRebuild => vec![self.provider.cache_rebuild()],
            Operation::Exec { command } => vec![self.provider.exec(command.as_deref())],
            Operation::ModuleInstall { modules, options } => {
                self.provider.module_install(modules.as_slice(), &options)
            }
            Operation::ModuleRemove { modules, options } => {
                self.provider.module_remove(modules.as_slice(), &options)
            }
            Operation::CreateAccount { username, account } => {
                self.provider.create_account(&username, &account)
            }
            Operation::Install {
                db_url,
                profile,
                options,
            } => vec![self.provider.install(&db_url, &profile, &options)],
        };

        let rendered: Vec<String> = commands
            .into_iter()
            .map(|command| command.config_options(self.exec_options.clone()).build())
            .collect();

        debug!(
            "Resolved {} command(s) via the {} provider",
            rendered.len(),
            self.provider.name()
        );

        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drush::DrushProvider;

    fn resolver_with(exec_options: CommandOptions) -> CommandResolver {
        CommandResolver::new(Box::new(DrushProvider::new("/var/www/html")), exec_options)
    }

    #[test]
    fn test_resolve_login() {
        let commands = resolver_with(Vec::new()).resolve(Operation::Login);
        assert_eq!(commands, vec!["drush --root=/var/www/html uli"]);
    }

    #[test]
    fn test_resolve_merges_exec_options() {
        let exec_options = vec![(
            "uri".to_string(),
            Some("http://localhost:8080".to_string()),
        )];
        let commands = resolver_with(exec_options).resolve(Operation::CacheRebuild);
        assert_eq!(
            commands,
            vec!["drush --root=/var/www/html --uri=http://localhost:8080 cr"]
        );
    }

    #[test]
    fn test_exec_options_never_overwrite_provider_options() {
        let exec_options = vec![("root".to_string(), Some("/elsewhere".to_string()))];
        let commands = resolver_with(exec_options).resolve(Operation::Login);
        assert_eq!(commands, vec!["drush --root=/var/www/html uli"]);
    }

    #[test]
    fn test_resolve_module_install_scalar_normalizes() {
        let commands = resolver_with(Vec::new()).resolve(Operation::ModuleInstall {
            modules: "views".into(),
            options: Vec::new(),
        });
        assert_eq!(
            commands,
            vec![
                "drush --root=/var/www/html en views",
                "drush --root=/var/www/html cr",
            ]
        );
    }

    #[test]
    fn test_resolve_module_install_preserves_order() {
        let commands = resolver_with(Vec::new()).resolve(Operation::ModuleInstall {
            modules: vec!["views".to_string(), "token".to_string()].into(),
            options: vec![("yes".to_string(), None)],
        });
        assert_eq!(commands.len(), 2);
        assert!(commands[0].contains("en views token"));
        assert!(commands[0].contains("--yes"));
        assert!(commands[1].ends_with("cr"));
    }

    #[test]
    fn test_resolve_create_account_end_to_end() {
        let commands = resolver_with(Vec::new()).resolve(Operation::CreateAccount {
            username: "alice".to_string(),
            account: AccountOptions {
                email: "a@example.com".to_string(),
                password: "p".to_string(),
                role: "admin".to_string(),
            },
        });

        assert_eq!(commands.len(), 2);
        assert!(commands[0].contains("alice"));
        assert!(commands[0].contains("--mail=a@example.com"));
        assert!(commands[0].contains("--password=p"));
        assert!(commands[1].contains("urol admin"));
        assert!(commands[1].contains("--name=alice"));
    }

    #[test]
    fn test_resolve_install() {
        let commands = resolver_with(Vec::new()).resolve(Operation::Install {
            db_url: "mysql://drupal:drupal@db:3306/drupal".to_string(),
            profile: "standard".to_string(),
            options: Vec::new(),
        });

        assert_eq!(commands.len(), 1);
        assert!(commands[0].contains("site-install standard"));
        assert!(commands[0].contains("--db-url=mysql://drupal:drupal@db:3306/drupal"));
        assert!(commands[0].contains("--site-name=Drupal Project"));
    }
}
