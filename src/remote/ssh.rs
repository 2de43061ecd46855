// ABOUTME: SSH connection options shared by remote commands and rsync transfers.
// ABOUTME: Produces the fixed ssh prefix: identity, port, host key checking off, user@host.

use super::command::{CommandLine, RemoteCommand, quote};
use crate::types::RemoteHost;
use std::path::{Path, PathBuf};

/// How to reach the remote host with the system `ssh` client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshOptions {
    host: RemoteHost,
    user: String,
    port: u16,
    identity_file: Option<PathBuf>,
}

impl SshOptions {
    pub fn new(host: RemoteHost, user: impl Into<String>) -> Self {
        Self {
            host,
            user: user.into(),
            port: 22,
            identity_file: None,
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn identity_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.identity_file = Some(path.into());
        self
    }

    /// `user@host`
    pub fn target(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    fn connection_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(6);
        if let Some(identity) = &self.identity_file {
            args.push("-i".to_string());
            args.push(identity.display().to_string());
        }
        args.push("-p".to_string());
        args.push(self.port.to_string());
        args.push("-o".to_string());
        args.push("StrictHostKeyChecking=no".to_string());
        args
    }

    /// `ssh <options> user@host <remote command>`
    pub fn command(&self, remote: &RemoteCommand) -> CommandLine {
        CommandLine::new("ssh")
            .args(self.connection_args())
            .arg(self.target())
            .arg(remote.render())
    }

    /// Value for `rsync -e`. rsync splits it on whitespace itself, so the
    /// identity path is quoted.
    pub fn rsync_shell(&self) -> String {
        std::iter::once("ssh".to_string())
            .chain(self.connection_args().iter().map(|a| quote(a).into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `user@host:<dir>`, bracketing IPv6 literals.
    pub fn rsync_destination(&self, remote_dir: &str) -> String {
        let host = self.host.as_str();
        if host.contains(':') {
            format!("{}@[{}]:{}", self.user, host, remote_dir)
        } else {
            format!("{}@{}:{}", self.user, host, remote_dir)
        }
    }

    /// `rsync -avz -e "<ssh>" <local file> user@host:<dir>`
    ///
    /// Archive mode keeps timestamps so unchanged files are skipped.
    pub fn rsync(&self, local_file: &Path, remote_dir: &str) -> CommandLine {
        CommandLine::new("rsync")
            .arg("-avz")
            .arg("-e")
            .arg(self.rsync_shell())
            .arg(local_file.display().to_string())
            .arg(self.rsync_destination(remote_dir))
    }
}
