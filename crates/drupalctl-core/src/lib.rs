//! # drupalctl-core
//!
//! Core library for the drupalctl CLI providing:
//! - Configuration file parsing (drupalctl.yaml)
//! - The executable command builder rendered by the command resolver
//! - Database settings and connection URL rendering
//! - Shared error types

pub mod config;
pub mod database;
pub mod error;
pub mod exec;

pub use config::{DrupalConfig, EnvironmentSettings};
pub use database::DatabaseSettings;
pub use error::{Error, Result};
pub use exec::{CommandOptions, ExecCommand};
