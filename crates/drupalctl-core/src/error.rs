//! Error types for drupalctl-core

use thiserror::Error;

/// Result type alias using drupalctl-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for drupalctl
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested command provider is not registered
    #[error("Unknown command provider: {provider}. Valid providers: drush")]
    UnknownProvider { provider: String },

    /// Provider registered but not declared by the active environment
    #[error("The environment doesn't support the {provider} command provider")]
    UnsupportedEnvironment { provider: String },

    /// Named settings template missing from the embedded store
    #[error("Unable to locate the {name} template file")]
    TemplateNotFound { name: String },

    /// An executed command reported failure
    #[error("Command failed ({status}): {command}")]
    CommandFailed { command: String, status: String },
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unknown provider error
    pub fn unknown_provider(provider: impl Into<String>) -> Self {
        Self::UnknownProvider {
            provider: provider.into(),
        }
    }

    /// Create an unsupported environment error
    pub fn unsupported_environment(provider: impl Into<String>) -> Self {
        Self::UnsupportedEnvironment {
            provider: provider.into(),
        }
    }

    /// Create a template not found error
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound { name: name.into() }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, status: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            status: status.into(),
        }
    }
}
