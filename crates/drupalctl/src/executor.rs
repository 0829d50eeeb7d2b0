//! External command execution boundary
//!
//! The resolver produces literal command-line strings; this module
//! hands them to the operating system one at a time, in order, inside
//! the application root. The first failing command aborts the remainder
//! of the sequence.

use anyhow::Result;
use camino::Utf8Path;
use drupalctl_core::Error;
use tokio::process::Command;
use tracing::debug;

use crate::output;

/// Run a sequence of rendered commands, stopping on the first failure.
pub async fn run_all(commands: &[String], working_dir: &Utf8Path) -> Result<()> {
    for command in commands {
        run(command, working_dir).await?;
    }
    Ok(())
}

/// Run one rendered command via the shell in the given working directory.
pub async fn run(command: &str, working_dir: &Utf8Path) -> Result<()> {
    debug!("Executing: {} (cwd: {})", command, working_dir);

    let spinner = output::spinner(command);
    let result = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(working_dir)
        .output()
        .await;
    spinner.finish_and_clear();

    let captured = result?;

    let stdout = String::from_utf8_lossy(&captured.stdout);
    if !stdout.trim().is_empty() {
        print!("{}", stdout);
    }

    if !captured.status.success() {
        let stderr = String::from_utf8_lossy(&captured.stderr);
        if !stderr.trim().is_empty() {
            eprint!("{}", stderr);
        }
        return Err(Error::command_failed(command, captured.status.to_string()).into());
    }

    output::success(command);
    Ok(())
}
