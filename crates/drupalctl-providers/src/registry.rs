//! Provider registry
//!
//! A closed mapping from provider-type keys to command provider
//! variants. Instantiation validates the requested kind against the
//! active environment's declared package list and binds the variant to
//! the environment's application root.

use std::fmt;
use std::str::FromStr;

use drupalctl_core::config::EnvironmentSettings;
use drupalctl_core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::drush::DrushProvider;
use crate::traits::CommandProvider;

/// Known command provider kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Drush, the Drupal shell
    Drush,
}

impl ProviderKind {
    /// The registry key for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Drush => "drush",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "drush" => Ok(ProviderKind::Drush),
            other => Err(Error::unknown_provider(other)),
        }
    }
}

/// Check whether a provider kind is registered for the given key.
pub fn has_provider(key: &str) -> bool {
    key.parse::<ProviderKind>().is_ok()
}

/// Create a provider instance bound to the environment's application root.
///
/// Fails with [`Error::UnknownProvider`] when the key is not registered
/// and with [`Error::UnsupportedEnvironment`] when the environment's
/// declared package list does not include it.
pub fn create_provider(
    key: &str,
    environment: &EnvironmentSettings,
) -> Result<Box<dyn CommandProvider>> {
    let kind: ProviderKind = key.parse()?;

    if !environment.supports(kind.as_str()) {
        return Err(Error::unsupported_environment(kind.as_str()));
    }

    debug!(
        "Creating {} provider bound to {}",
        kind, environment.app_root
    );

    match kind {
        ProviderKind::Drush => Ok(Box::new(DrushProvider::new(environment.app_root.clone()))),
    }
}
