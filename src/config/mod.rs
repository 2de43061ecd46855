// ABOUTME: Deployment configuration assembled from the command line.
// ABOUTME: Holds connection defaults and derives the remote stack paths and stack name.

use crate::remote::SshOptions;
use crate::types::{AppName, ArgumentError, RemoteHost, Stage};
use std::path::{Path, PathBuf};

/// Identity file passed to `ssh -i`, relative to the working directory.
pub const DEFAULT_IDENTITY_FILE: &str = "ssh_key";

/// User the stack is deployed as.
pub const DEFAULT_REMOTE_USER: &str = "root";

pub const DEFAULT_SSH_PORT: u16 = 61111;

/// Directory on the remote host under which every application gets its own tree.
pub const STACKS_ROOT: &str = "~/stacks";

/// Everything needed to deploy one stack file to one host.
///
/// Values are fixed once built; the remote directory and stack name are
/// recomputed from the application name and stage on every call so that
/// every command agrees on them.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    app_name: AppName,
    stage: Stage,
    remote_host: RemoteHost,
    template_path: PathBuf,
    stack_file_name: String,
    identity_file: PathBuf,
    remote_user: String,
    ssh_port: u16,
}

impl DeployConfig {
    /// Build a configuration with the default identity file, user and port.
    ///
    /// Fails if `template_path` has no UTF-8 file name, since that name is
    /// reused for the file on the remote host.
    pub fn new(
        app_name: AppName,
        template_path: impl Into<PathBuf>,
        remote_host: RemoteHost,
        stage: Stage,
    ) -> Result<Self, ArgumentError> {
        let template_path = template_path.into();
        let stack_file_name = template_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| ArgumentError::NotAFilePath(template_path.clone()))?;

        Ok(Self {
            app_name,
            stage,
            remote_host,
            template_path,
            stack_file_name,
            identity_file: PathBuf::from(DEFAULT_IDENTITY_FILE),
            remote_user: DEFAULT_REMOTE_USER.to_string(),
            ssh_port: DEFAULT_SSH_PORT,
        })
    }

    pub fn with_identity_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.identity_file = path.into();
        self
    }

    pub fn with_remote_user(mut self, user: impl Into<String>) -> Self {
        self.remote_user = user.into();
        self
    }

    pub fn with_ssh_port(mut self, port: u16) -> Self {
        self.ssh_port = port;
        self
    }

    pub fn app_name(&self) -> &AppName {
        &self.app_name
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn remote_host(&self) -> &RemoteHost {
        &self.remote_host
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn identity_file(&self) -> &Path {
        &self.identity_file
    }

    pub fn remote_user(&self) -> &str {
        &self.remote_user
    }

    pub fn ssh_port(&self) -> u16 {
        self.ssh_port
    }

    /// `~/stacks/<app_name>/<stage>/`, always with a trailing slash.
    pub fn remote_base_dir(&self) -> String {
        format!("{}/{}/{}/", STACKS_ROOT, self.app_name, self.stage)
    }

    /// `<app_name>-<stage>`, the name given to `docker stack deploy`.
    pub fn stack_name(&self) -> String {
        format!("{}-{}", self.app_name, self.stage)
    }

    /// File name of the template, reused unchanged on the remote host.
    pub fn stack_file_name(&self) -> &str {
        &self.stack_file_name
    }

    /// Where the rendered template lives after the transfer.
    pub fn remote_stack_file(&self) -> String {
        format!("{}{}", self.remote_base_dir(), self.stack_file_name)
    }

    /// `<stage>-v<version>.yml`
    pub fn archive_file_name(&self, version: u64) -> String {
        format!("{}-v{}.yml", self.stage, version)
    }

    pub fn archive_path(&self, version: u64) -> String {
        format!("{}{}", self.remote_base_dir(), self.archive_file_name(version))
    }

    /// SSH connection settings shared by every remote command.
    pub fn ssh_options(&self) -> SshOptions {
        SshOptions::new(self.remote_host.clone(), self.remote_user.clone())
            .identity_file(self.identity_file.clone())
            .port(self.ssh_port)
    }
}
