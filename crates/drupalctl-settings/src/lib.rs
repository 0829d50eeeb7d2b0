//! # drupalctl-settings
//!
//! Idempotent, templated mutation of Drupal settings files:
//!
//! - Embedded setting templates and snippets looked up by filename
//! - Append-unless-matched injection guarded by a multiline regex, with
//!   `{{NAME}}` placeholder substitution in the appended body
//! - Salt hash generation for the `hash_salt` setting
//!
//! Injection is deliberately not a general templating engine: the only
//! operation is "append this snippet once", which makes setup workflows
//! safe to re-run.

pub mod injector;
pub mod salt;
pub mod snippets;

pub use injector::{append_unless_matches, ensure_file, SettingsPatch};
pub use salt::generate_salt_hash;
pub use snippets::SnippetStore;
