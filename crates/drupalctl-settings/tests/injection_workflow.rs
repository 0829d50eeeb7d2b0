//! End-to-end injection workflow tests
//!
//! Exercises the same sequence of patches the install and setup
//! commands apply, verifying the whole workflow is safe to re-run.

use camino::Utf8PathBuf;
use drupalctl_settings::{ensure_file, SettingsPatch, SnippetStore};
use std::fs;

fn settings_file(dir: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join("sites/default/settings.php"))
        .expect("path should be valid UTF-8")
}

fn apply_install_patches(path: &camino::Utf8Path) {
    let salt = vec![(
        "HASH_SALT".to_string(),
        "file_get_contents(dirname(DRUPAL_ROOT) . '/salt.txt');".to_string(),
    )];
    SettingsPatch::HashSalt.apply(path, &salt).unwrap();
    SettingsPatch::ConfigSyncDirectory.apply(path, &[]).unwrap();
    SettingsPatch::DisallowAuthorizeOperations
        .apply(path, &[])
        .unwrap();
    SettingsPatch::LocalSettingsInclude.apply(path, &[]).unwrap();
}

#[test]
fn test_install_workflow_is_idempotent() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = settings_file(&dir);

    ensure_file(&path, &SnippetStore::settings_base().unwrap()).unwrap();
    apply_install_patches(&path);
    let first = fs::read_to_string(&path).unwrap();

    // Everything the workflow injected is present exactly once
    assert_eq!(first.matches("$settings['hash_salt']").count(), 1);
    assert_eq!(
        first.matches("$settings['config_sync_directory']").count(),
        1
    );
    assert_eq!(
        first
            .matches("$settings['allow_authorize_operations']")
            .count(),
        1
    );

    // A second full run leaves the file byte-for-byte unchanged
    ensure_file(&path, &SnippetStore::settings_base().unwrap()).unwrap();
    apply_install_patches(&path);
    let second = fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_local_settings_workflow() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("sites/default/settings.local.php"))
        .expect("path should be valid UTF-8");

    ensure_file(&path, &SnippetStore::local_settings_base().unwrap()).unwrap();

    let placeholders = vec![
        ("DATABASE".to_string(), "drupal".to_string()),
        ("USERNAME".to_string(), "drupal".to_string()),
        ("PASSWORD".to_string(), "secret".to_string()),
        ("HOST".to_string(), "db".to_string()),
        ("PORT".to_string(), "3306".to_string()),
        ("DRIVER".to_string(), "mysql".to_string()),
    ];
    assert!(SettingsPatch::DatabaseConnection
        .apply(&path, &placeholders)
        .unwrap());

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("'password' => 'secret'"));
    assert!(!content.contains("{{"));

    // Re-running the database injection is a no-op
    assert!(!SettingsPatch::DatabaseConnection
        .apply(&path, &placeholders)
        .unwrap());
}
