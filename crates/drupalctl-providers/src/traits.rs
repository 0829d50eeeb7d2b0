//! Command provider trait definitions

use drupalctl_core::exec::{CommandOptions, ExecCommand};

/// Options required to provision a user account.
///
/// Every field is required: the account-creation sequence cannot be
/// built without the mail address, password, and role it assigns.
#[derive(Debug, Clone)]
pub struct AccountOptions {
    /// Account email address
    pub email: String,

    /// Account password
    pub password: String,

    /// Role assigned after the account is created
    pub role: String,
}

/// Capability set every command provider implements.
///
/// Each method describes the command(s) that realize one
/// site-administration intent. Providers are pure: they build
/// [`ExecCommand`] values and never execute anything. Multi-command
/// operations return their commands in execution order - later commands
/// may depend on state left by earlier ones (a role can only be
/// assigned to an existing account).
pub trait CommandProvider: std::fmt::Debug + Send + Sync {
    /// Get the provider name (e.g. "drush")
    fn name(&self) -> &'static str;

    /// Command that prints a one-time login URL
    fn login(&self) -> ExecCommand;

    /// Command that rebuilds the application cache
    fn cache_rebuild(&self) -> ExecCommand;

    /// Pass an arbitrary sub-command through to the underlying tool;
    /// with no sub-command the bare tool invocation is returned
    fn exec(&self, command: Option<&str>) -> ExecCommand;

    /// Enable the given modules, then rebuild the cache
    fn module_install(&self, modules: &[String], options: &CommandOptions) -> Vec<ExecCommand>;

    /// Uninstall the given modules, then rebuild the cache
    fn module_remove(&self, modules: &[String], options: &CommandOptions) -> Vec<ExecCommand>;

    /// Create a user account, then assign its role
    fn create_account(&self, username: &str, account: &AccountOptions) -> Vec<ExecCommand>;

    /// Install the application against the given database URL
    fn install(&self, db_url: &str, profile: &str, options: &CommandOptions) -> ExecCommand;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn CommandProvider) {}
}
