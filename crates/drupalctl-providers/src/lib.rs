//! Command providers for drupalctl
//!
//! This crate provides the command provider abstraction: variants that
//! translate high-level site-administration intents (log in, rebuild
//! cache, install modules, create accounts, install the site) into
//! concrete command lines for one underlying tool.
//!
//! Currently one provider is built in:
//!
//! - Drush (the Drupal shell)
//!
//! Providers perform no I/O themselves; the [`resolver::CommandResolver`]
//! renders their output to literal command strings which the caller
//! hands to an external executor.

pub mod drush;
pub mod registry;
pub mod resolver;
pub mod traits;

pub use drush::{default_install_options, DrushProvider};
pub use registry::{create_provider, has_provider, ProviderKind};
pub use resolver::{CommandResolver, Modules, Operation};
pub use traits::{AccountOptions, CommandProvider};
