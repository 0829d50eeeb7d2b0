//! Configuration management commands

use anyhow::Result;
use camino::Utf8Path;
use drupalctl_core::config::generate_default_config;
use drupalctl_core::DrupalConfig;
use std::fs;

use crate::cli::{ConfigCommands, ConfigInitArgs, ConfigShowArgs};
use crate::output;

pub async fn run(command: ConfigCommands, config_path: Option<&Utf8Path>) -> Result<()> {
    match command {
        ConfigCommands::Init(args) => init(args),
        ConfigCommands::Show(args) => show(args, config_path),
    }
}

fn init(args: ConfigInitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!("{} already exists (use --force to overwrite)", args.output);
    }

    fs::write(&args.output, generate_default_config(&args.app_root))?;
    output::success(&format!("Wrote {}", args.output));
    Ok(())
}

fn show(args: ConfigShowArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = DrupalConfig::load(config_path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(config.inner())?);
    } else {
        print!("{}", config.to_yaml()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = Utf8PathBuf::from_path_buf(dir.path().join("drupalctl.yaml"))
            .expect("path should be valid UTF-8");

        init(ConfigInitArgs {
            app_root: "/app".to_string(),
            output: output.clone(),
            force: false,
        })
        .unwrap();

        let config = DrupalConfig::load(Some(output.as_path())).unwrap();
        assert_eq!(config.environment().app_root, "/app");
        assert!(config.environment().supports("drush"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = Utf8PathBuf::from_path_buf(dir.path().join("drupalctl.yaml"))
            .expect("path should be valid UTF-8");
        fs::write(&output, "existing").unwrap();

        let result = init(ConfigInitArgs {
            app_root: "/app".to_string(),
            output: output.clone(),
            force: false,
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "existing");
    }
}
