// ABOUTME: Remote execution over the system ssh and rsync clients.
// ABOUTME: Builds argument vectors and runs them through a swappable CommandRunner.

mod command;
mod error;
mod runner;
mod ssh;

pub use command::{CommandLine, RemoteCommand, quote, quote_path};
pub use error::{RemoteCommandError, Result};
pub use runner::{CommandRunner, OutputMode, ProcessRunner};
pub use ssh::SshOptions;
