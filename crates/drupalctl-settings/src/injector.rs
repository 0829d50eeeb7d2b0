//! Idempotent settings file injection
//!
//! Appends templated snippets to a settings file unless a guard pattern
//! already matches the current content, then substitutes `{{NAME}}`
//! placeholders in the appended body only. Re-running the same patch is
//! a no-op, so install/setup workflows can repeat safely without
//! duplicating configuration blocks.
//!
//! Files are rewritten whole (read-modify-write) and are not locked;
//! concurrent writers against the same settings file are
//! last-writer-wins.

use camino::Utf8Path;
use drupalctl_core::error::{Error, Result};
use regex::Regex;
use std::fs;
use tracing::debug;

use crate::snippets::SnippetStore;

/// Ensure the target file exists, seeding it with the base content.
///
/// Not guard-checked: an existing file is left untouched.
pub fn ensure_file(path: &Utf8Path, base: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, base)?;
    debug!("Seeded {}", path);
    Ok(())
}

/// Append `snippet` to the file at `path` unless `guard` already
/// matches the current content.
///
/// Placeholder tokens (`{{NAME}}`) in the appended body are replaced
/// from `placeholders`; a token without a supplied value stays literal.
/// Returns whether the file was modified.
pub fn append_unless_matches(
    path: &Utf8Path,
    guard: &Regex,
    snippet: &str,
    placeholders: &[(String, String)],
) -> Result<bool> {
    let content = fs::read_to_string(path)?;

    if guard.is_match(&content) {
        debug!("Guard pattern already matches {}, skipping", path);
        return Ok(false);
    }

    let mut updated = content;
    updated.push_str(&substitute(snippet, placeholders));
    fs::write(path, updated)?;
    debug!("Appended snippet to {}", path);

    Ok(true)
}

/// Replace `{{NAME}}` tokens with their supplied values.
fn substitute(body: &str, placeholders: &[(String, String)]) -> String {
    let mut out = body.to_string();
    for (name, value) in placeholders {
        out = out.replace(&format!("{{{{{}}}}}", name), value);
    }
    out
}

/// Known settings patches: an embedded snippet paired with the guard
/// pattern that makes its insertion idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsPatch {
    /// Uncommented settings.local.php include in settings.php
    LocalSettingsInclude,

    /// The `hash_salt` setting (placeholder: HASH_SALT)
    HashSalt,

    /// The `config_sync_directory` setting
    ConfigSyncDirectory,

    /// Disallow module install/update through the admin UI
    DisallowAuthorizeOperations,

    /// The default database connection block (placeholders: DATABASE,
    /// USERNAME, PASSWORD, HOST, PORT, DRIVER)
    DatabaseConnection,
}

impl SettingsPatch {
    /// The embedded snippet filename
    pub fn snippet_file(&self) -> &'static str {
        match self {
            SettingsPatch::LocalSettingsInclude => "settings.local.txt",
            SettingsPatch::HashSalt => "settings.hash.txt",
            SettingsPatch::ConfigSyncDirectory => "settings.config.txt",
            SettingsPatch::DisallowAuthorizeOperations => "settings.authorize.txt",
            SettingsPatch::DatabaseConnection => "settings.database.txt",
        }
    }

    /// The multiline guard pattern detecting an already-present block
    pub fn guard_pattern(&self) -> &'static str {
        match self {
            SettingsPatch::LocalSettingsInclude => {
                r"(?m)^if.+\(file_exists\(.+settings\.local\.php'\)\)\s*?\{\n.+\n\}$"
            }
            SettingsPatch::HashSalt => r"(?m)^\$settings\['hash_salt'\].+;$",
            SettingsPatch::ConfigSyncDirectory => {
                r"(?m)^\$settings\['config_sync_directory'\].+;$"
            }
            SettingsPatch::DisallowAuthorizeOperations => {
                r"(?m)^\$settings\['allow_authorize_operations'\].+;$"
            }
            SettingsPatch::DatabaseConnection => {
                r"(?m)^\$databases\[.+\]\s+?=\s+?(\[|array\()$"
            }
        }
    }

    /// Apply the patch to the file at `path`, substituting the given
    /// placeholder values into the appended body.
    pub fn apply(&self, path: &Utf8Path, placeholders: &[(String, String)]) -> Result<bool> {
        let guard = Regex::new(self.guard_pattern())
            .map_err(|e| Error::invalid_config(format!("Invalid guard pattern: {}", e)))?;
        let snippet = SnippetStore::snippet(self.snippet_file())?;
        append_unless_matches(path, &guard, &snippet, placeholders)
    }
}
