// ABOUTME: Process execution seam for remote operations.
// ABOUTME: ProcessRunner spawns local ssh/rsync processes and waits for them to finish.

use super::command::CommandLine;
use super::error::{ExitSnafu, Result, SpawnSnafu};
use async_trait::async_trait;
use snafu::ResultExt;
use std::process::Stdio;
use tokio::process::Command;

/// What to do with a child's stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Stream stdout and stderr to the terminal.
    Inherit,
    /// Collect stdout and return it trimmed; stderr is kept for errors.
    Capture,
}

/// Runs a command to completion.
///
/// Returns `Some(stdout)` for [`OutputMode::Capture`] and `None` for
/// [`OutputMode::Inherit`]. A non-zero exit is an error.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn execute(&self, command: &CommandLine, mode: OutputMode) -> Result<Option<String>>;

    async fn run(&self, command: &CommandLine) -> Result<()> {
        self.execute(command, OutputMode::Inherit).await.map(|_| ())
    }

    async fn capture(&self, command: &CommandLine) -> Result<String> {
        self.execute(command, OutputMode::Capture)
            .await
            .map(Option::unwrap_or_default)
    }
}

/// Runs commands as local child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn execute(&self, command: &CommandLine, mode: OutputMode) -> Result<Option<String>> {
        tracing::debug!(command = %command, "running");

        let mut process = Command::new(command.program());
        process.args(command.get_args()).stdin(Stdio::null());

        match mode {
            OutputMode::Inherit => {
                let status = process
                    .status()
                    .await
                    .context(SpawnSnafu { command: command.clone() })?;

                if !status.success() {
                    tracing::error!(command = %command, %status, "command failed");
                    return ExitSnafu {
                        command: command.clone(),
                        status: status.to_string(),
                        stderr: String::new(),
                    }
                    .fail();
                }
                Ok(None)
            }
            OutputMode::Capture => {
                let output = process
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .await
                    .context(SpawnSnafu { command: command.clone() })?;

                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                    tracing::error!(command = %command, status = %output.status, %stderr, "command failed");
                    return ExitSnafu {
                        command: command.clone(),
                        status: output.status.to_string(),
                        stderr,
                    }
                    .fail();
                }

                Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::remote::RemoteCommandError;

    #[tokio::test]
    async fn capture_returns_trimmed_stdout() {
        let cmd = CommandLine::new("sh").args(["-c", "printf '  4\\n'"]);
        let out = ProcessRunner.capture(&cmd).await.unwrap();
        assert_eq!(out, "4");
    }

    #[tokio::test]
    async fn inherit_returns_nothing() {
        let cmd = CommandLine::new("true");
        assert_eq!(ProcessRunner.execute(&cmd, OutputMode::Inherit).await.unwrap(), None);
    }

    #[tokio::test]
    async fn non_zero_exit_carries_command_and_stderr() {
        let cmd = CommandLine::new("sh").args(["-c", "echo nope >&2; exit 3"]);
        let err = ProcessRunner.capture(&cmd).await.unwrap_err();
        assert_eq!(err.command(), &cmd);
        match err {
            RemoteCommandError::Exit { stderr, status, .. } => {
                assert_eq!(stderr, "nope");
                assert!(status.contains('3'), "status was {status}");
            }
            other => panic!("expected exit error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let cmd = CommandLine::new("stackship-no-such-program");
        let err = ProcessRunner.run(&cmd).await.unwrap_err();
        assert!(matches!(err, RemoteCommandError::Spawn { .. }));
    }
}
