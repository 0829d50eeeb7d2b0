//! Configuration file loading and parsing

use crate::database::DatabaseSettings;
use crate::error::{Error, Result};
use crate::exec::CommandOptions;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use tracing::debug;

/// Configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["drupalctl.yaml", "drupalctl.yml"];

/// Default Drupal docroot, relative to the project root
const DEFAULT_DRUPAL_ROOT: &str = "web";

/// Default command provider kind
const DEFAULT_PROVIDER: &str = "drush";

fn default_drupal_root() -> String {
    DEFAULT_DRUPAL_ROOT.to_string()
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

/// Parsed drupalctl.yaml contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrupalConfigFile {
    /// Drupal docroot, relative to the project root
    #[serde(default = "default_drupal_root")]
    pub drupal_root: String,

    /// Default command provider kind
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Active runtime environment settings
    pub environment: EnvironmentSettings,

    /// Database connection used for install/setup
    pub database: Option<DatabaseSettings>,
}

/// Declared capabilities of the active runtime environment.
///
/// The provider registry validates requested provider kinds against
/// `packages`, binds providers to `app_root`, and the resolver merges
/// `exec_options` into every rendered command at lower precedence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentSettings {
    /// Application root path inside the runtime environment
    pub app_root: Utf8PathBuf,

    /// Provider/package keys the environment supports
    #[serde(default)]
    pub packages: Vec<String>,

    /// Global execution options merged into every resolved command
    /// (a null value marks a bare flag)
    #[serde(default)]
    pub exec_options: BTreeMap<String, Option<String>>,
}

impl EnvironmentSettings {
    /// Check whether the environment declares support for a package key.
    pub fn supports(&self, package: &str) -> bool {
        self.packages.iter().any(|p| p == package)
    }

    /// The exec option defaults as ordered pairs for command merging.
    pub fn exec_option_pairs(&self) -> CommandOptions {
        self.exec_options
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

/// Loaded drupalctl configuration
#[derive(Debug, Clone)]
pub struct DrupalConfig {
    /// The parsed configuration
    pub config: DrupalConfigFile,

    /// Path to the configuration file
    pub config_path: Utf8PathBuf,

    /// Project root (the directory holding the configuration file)
    pub project_root: Utf8PathBuf,
}

impl DrupalConfig {
    /// Load configuration from the specified path or search for it
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let (config_path, content) = if let Some(p) = path {
            let content = fs::read_to_string(p).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::config_not_found(p.as_str())
                } else {
                    Error::Io(e)
                }
            })?;
            (p.to_owned(), content)
        } else {
            Self::find_config()?
        };

        let project_root = config_path
            .parent()
            .map(|p| p.to_owned())
            .unwrap_or_else(|| Utf8PathBuf::from("."));

        let config: DrupalConfigFile = serde_yaml_ng::from_str(&content)?;
        debug!("Loaded configuration from {}", config_path);

        Ok(Self {
            config,
            config_path,
            project_root,
        })
    }

    /// Find the configuration file in the current directory or parents
    fn find_config() -> Result<(Utf8PathBuf, String)> {
        let cwd = std::env::current_dir().map_err(Error::Io)?;
        let cwd = Utf8PathBuf::try_from(cwd)
            .map_err(|_| Error::invalid_config("Current directory path is not valid UTF-8"))?;

        let mut current = cwd.as_path();

        loop {
            for name in CONFIG_FILE_NAMES {
                let path = current.join(name);
                if path.exists() {
                    let content = fs::read_to_string(&path)?;
                    return Ok((path, content));
                }
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err(Error::config_not_found(
            "drupalctl.yaml (searched current and parent directories)",
        ))
    }

    /// Get the inner configuration file
    pub fn inner(&self) -> &DrupalConfigFile {
        &self.config
    }

    /// Get the default command provider kind
    pub fn provider(&self) -> &str {
        &self.config.provider
    }

    /// Get the active environment settings
    pub fn environment(&self) -> &EnvironmentSettings {
        &self.config.environment
    }

    /// Get the database settings, failing when the section is absent
    pub fn database(&self) -> Result<&DatabaseSettings> {
        self.config.database.as_ref().ok_or_else(|| {
            Error::invalid_config("No database section configured in drupalctl.yaml")
        })
    }

    /// Get the database settings when configured
    pub fn database_opt(&self) -> Option<&DatabaseSettings> {
        self.config.database.as_ref()
    }

    /// Full path to the Drupal docroot
    pub fn drupal_root_path(&self) -> Utf8PathBuf {
        self.project_root.join(&self.config.drupal_root)
    }

    /// Full path to the Drupal settings file, or the local variant
    pub fn settings_path(&self, local: bool) -> Utf8PathBuf {
        let name = if local {
            "settings.local.php"
        } else {
            "settings.php"
        };
        self.drupal_root_path().join("sites/default").join(name)
    }

    /// Full path to the Drupal services file
    pub fn services_path(&self) -> Utf8PathBuf {
        self.drupal_root_path().join("sites/default/services.yml")
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(&self.config).map_err(Error::from)
    }
}

/// Generate a starter drupalctl.yaml
pub fn generate_default_config(app_root: &str) -> String {
    format!(
        r#"---
# drupalctl configuration
drupal_root: {drupal_root}
provider: {provider}

environment:
  app_root: {app_root}
  packages:
    - {provider}
  exec_options: {{}}

database:
  driver: mysql
  host: 127.0.0.1
  port: 3306
  username: drupal
  password: drupal
  database: drupal
"#,
        drupal_root = DEFAULT_DRUPAL_ROOT,
        provider = DEFAULT_PROVIDER,
        app_root = app_root,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_generation() {
        let config = generate_default_config("/var/www/html");
        assert!(config.contains("drupal_root: web"));
        assert!(config.contains("provider: drush"));
        assert!(config.contains("app_root: /var/www/html"));

        let parsed: DrupalConfigFile = serde_yaml_ng::from_str(&config).unwrap();
        assert!(parsed.environment.supports("drush"));
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = r#"
environment:
  app_root: /var/www/html
"#;
        let config: DrupalConfigFile = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.drupal_root, "web");
        assert_eq!(config.provider, "drush");
        assert!(config.environment.packages.is_empty());
        assert!(config.database.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
drupal_root: docroot
provider: drush
environment:
  app_root: /app
  packages:
    - drush
  exec_options:
    uri: http://localhost:8080
    no-interaction: ~
database:
  host: db
  username: drupal
  password: drupal
  database: drupal
"#;
        let config: DrupalConfigFile = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.drupal_root, "docroot");
        assert!(config.environment.supports("drush"));
        assert_eq!(
            config.environment.exec_options.get("uri"),
            Some(&Some("http://localhost:8080".to_string()))
        );
        assert_eq!(
            config.environment.exec_options.get("no-interaction"),
            Some(&None)
        );
        assert!(config.database.is_some());
    }

    #[test]
    fn test_settings_paths() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = Utf8PathBuf::from_path_buf(temp_dir.path().join("drupalctl.yaml"))
            .expect("path should be valid UTF-8");
        std::fs::write(&config_path, "environment:\n  app_root: /var/www/html\n").unwrap();

        let config = DrupalConfig::load(Some(config_path.as_path())).unwrap();
        assert_eq!(
            config.settings_path(false),
            config.project_root.join("web/sites/default/settings.php")
        );
        assert_eq!(
            config.settings_path(true),
            config
                .project_root
                .join("web/sites/default/settings.local.php")
        );
    }

    #[test]
    fn test_load_nonexistent_file() {
        let path = Utf8Path::new("/tmp/nonexistent-drupalctl-config-12345.yaml");
        let result = DrupalConfig::load(Some(path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(
            matches!(err, Error::ConfigNotFound { .. }),
            "Expected ConfigNotFound, got: {:?}",
            err
        );
    }

    #[test]
    fn test_load_invalid_yaml_syntax() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("drupalctl.yaml");
        std::fs::write(&config_path, "environment:\n  app_root: [[[").unwrap();

        let utf8_path =
            Utf8PathBuf::from_path_buf(config_path).expect("path should be valid UTF-8");
        let result = DrupalConfig::load(Some(utf8_path.as_path()));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(
            matches!(err, Error::YamlParse(_)),
            "Expected YamlParse, got: {:?}",
            err
        );
    }

    #[test]
    fn test_load_missing_environment_section() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("drupalctl.yaml");
        std::fs::write(&config_path, "drupal_root: web\n").unwrap();

        let utf8_path =
            Utf8PathBuf::from_path_buf(config_path).expect("path should be valid UTF-8");
        let result = DrupalConfig::load(Some(utf8_path.as_path()));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains("missing field"),
            "Expected 'missing field' in error, got: {}",
            err
        );
    }
}
