use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use buildstamp_core::{CommandOutput, ProcessRunner};

/// Runs external commands through tokio with a hard timeout so a wedged
/// binary can never hang the build.
#[derive(Debug, Default)]
pub struct GitCommandRunner;

#[async_trait]
impl ProcessRunner for GitCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        timeout: Duration,
    ) -> Result<CommandOutput> {
        let mut command = tokio::process::Command::new(program);
        command
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(timeout, command.output())
            .await
            .with_context(|| format!("{program} timed out after {}s", timeout.as_secs()))?
            .with_context(|| format!("failed to launch {program}"))?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}
