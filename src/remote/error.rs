// ABOUTME: Remote command error types with SNAFU pattern.
// ABOUTME: Every variant carries the full command line that failed.

use super::command::CommandLine;
use snafu::Snafu;

/// A local `ssh`/`rsync` process could not be run or exited non-zero.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RemoteCommandError {
    #[snafu(display("failed to start `{command}`: {source}"))]
    Spawn {
        command: CommandLine,
        source: std::io::Error,
    },

    #[snafu(display("`{command}` exited with {status}{}", stderr_suffix(stderr)))]
    Exit {
        command: CommandLine,
        status: String,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

impl RemoteCommandError {
    /// The command that failed.
    pub fn command(&self) -> &CommandLine {
        match self {
            RemoteCommandError::Spawn { command, .. } => command,
            RemoteCommandError::Exit { command, .. } => command,
        }
    }
}

pub type Result<T> = std::result::Result<T, RemoteCommandError>;
