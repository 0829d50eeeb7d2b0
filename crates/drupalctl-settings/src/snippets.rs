//! Embedded Drupal settings templates

use drupalctl_core::error::{Error, Result};
use rust_embed::RustEmbed;

/// Embedded settings templates and snippets
#[derive(RustEmbed)]
#[folder = "templates/"]
#[prefix = ""]
struct Templates;

/// Lookup of setting template bodies by filename
pub struct SnippetStore;

impl SnippetStore {
    /// Load the base settings.php template
    pub fn settings_base() -> Result<String> {
        Self::load("settings.php.txt")
    }

    /// Load the base settings.local.php template
    pub fn local_settings_base() -> Result<String> {
        Self::load("settings.local.php.txt")
    }

    /// Load the base services.yml template
    pub fn services_base() -> Result<String> {
        Self::load("services.yml.txt")
    }

    /// Load a settings snippet by filename
    pub fn snippet(filename: &str) -> Result<String> {
        Self::load(&format!("snippets/{}", filename))
    }

    fn load(name: &str) -> Result<String> {
        let file = Templates::get(name).ok_or_else(|| Error::template_not_found(name))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|_| Error::template_not_found(name))?;
        Ok(content.to_string())
    }
}
