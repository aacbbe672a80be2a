use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

/// Captured result of an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was killed by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Capability for running an external command with a bounded timeout.
///
/// Resolvers hold this as a boxed trait object so tests can substitute a
/// fake runner returning canned output instead of invoking a real binary.
#[async_trait]
pub trait ProcessRunner: std::fmt::Debug + Send + Sync {
    /// # Errors
    /// Returns error if the process cannot be launched or the timeout
    /// elapses before it exits. A non-zero exit is not an error; it is
    /// reported through [`CommandOutput::exit_code`].
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
        timeout: Duration,
    ) -> Result<CommandOutput>;
}
