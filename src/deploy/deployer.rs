// ABOUTME: Stack deployment orchestrator.
// ABOUTME: Runs the six deployment steps in order and stops at the first failure.

use super::revision::RevisionCount;
use crate::config::DeployConfig;
use crate::error::Result;
use crate::remote::{CommandLine, CommandRunner, ProcessRunner, RemoteCommand};
use crate::template;
use tracing::{Instrument, Span, info, info_span};

/// Outcome of a completed deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub stack_name: String,
    pub remote_stack_file: String,
    pub revisions: RevisionCount,
    pub version: u64,
    pub archive_path: String,
}

/// Deploys one rendered stack file to one host.
///
/// Steps, in the order [`run`](Self::run) executes them:
///
/// 1. [`ensure_remote_directory`](Self::ensure_remote_directory)
/// 2. [`render_template`](Self::render_template)
/// 3. [`transfer_template`](Self::transfer_template)
/// 4. [`deploy_stack`](Self::deploy_stack)
/// 5. [`count_deployed_revisions`](Self::count_deployed_revisions)
/// 6. [`archive_revision`](Self::archive_revision)
///
/// Nothing is undone when a step fails. Two deployers targeting the same
/// application and stage at once can pick the same version and overwrite
/// each other's archive.
pub struct StackDeployer<R = ProcessRunner> {
    config: DeployConfig,
    runner: R,
    span: Span,
}

impl StackDeployer<ProcessRunner> {
    pub fn new(config: DeployConfig) -> Self {
        Self::with_runner(config, ProcessRunner)
    }
}

impl<R: CommandRunner> StackDeployer<R> {
    pub fn with_runner(config: DeployConfig, runner: R) -> Self {
        let span = info_span!(
            "deploy",
            app = %config.app_name(),
            stage = %config.stage(),
            host = %config.remote_host(),
        );
        Self {
            config,
            runner,
            span,
        }
    }

    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn ssh(&self, remote: RemoteCommand) -> CommandLine {
        self.config.ssh_options().command(&remote)
    }

    /// Create the remote stack directory (`mkdir -p`).
    pub async fn ensure_remote_directory(&self) -> Result<()> {
        let dir = self.config.remote_base_dir();
        let cmd = self.ssh(RemoteCommand::new("mkdir").arg("-p").path(&dir));
        self.runner.run(&cmd).await?;
        info!("Directory ensured: {}", dir);
        Ok(())
    }

    /// Substitute environment variables into the template and rewrite it in place.
    pub fn render_template(&self) -> Result<()> {
        template::render_file(self.config.template_path())?;
        info!(
            "Placeholders replaced in {}",
            self.config.template_path().display()
        );
        Ok(())
    }

    /// Copy the rendered template into the remote stack directory with rsync.
    pub async fn transfer_template(&self) -> Result<()> {
        let dir = self.config.remote_base_dir();
        let cmd = self
            .config
            .ssh_options()
            .rsync(self.config.template_path(), &dir);
        self.runner.run(&cmd).await?;
        info!("File synced to {}:{}", self.config.remote_host(), dir);
        Ok(())
    }

    /// `docker stack deploy` the transferred file under the stack name.
    pub async fn deploy_stack(&self) -> Result<()> {
        let stack_name = self.config.stack_name();
        let cmd = self.ssh(
            RemoteCommand::new("docker")
                .arg("stack")
                .arg("deploy")
                .arg("--with-registry-auth")
                .arg("--resolve-image")
                .arg("always")
                .arg("--compose-file")
                .path(&self.config.remote_stack_file())
                .arg(&stack_name),
        );
        self.runner.run(&cmd).await?;
        info!(
            "Successfully deployed {} on {}",
            stack_name,
            self.config.remote_host()
        );
        Ok(())
    }

    /// Count entries in the remote stack directory.
    ///
    /// A failed listing is silenced on the remote side and shows up as
    /// [`RevisionCount::Unavailable`]; only the ssh call itself can fail.
    pub async fn count_deployed_revisions(&self) -> Result<RevisionCount> {
        let dir = self.config.remote_base_dir();
        let cmd = self.ssh(
            RemoteCommand::new("ls")
                .arg("-1")
                .path(&dir)
                .silence_stderr()
                .pipe(RemoteCommand::new("wc").arg("-l")),
        );
        let output = self.runner.capture(&cmd).await?;
        let count = RevisionCount::from_listing(&output);
        info!("File count in {}: {}", dir, count);
        Ok(count)
    }

    /// Copy the deployed file to `<stage>-v<version>.yml` next to it.
    ///
    /// Returns the remote archive path.
    pub async fn archive_revision(&self, version: u64) -> Result<String> {
        let archive = self.config.archive_path(version);
        let cmd = self.ssh(
            RemoteCommand::new("cp")
                .path(&self.config.remote_stack_file())
                .path(&archive),
        );
        self.runner.run(&cmd).await?;
        info!("Successfully copied file to {}", archive);
        Ok(archive)
    }

    /// Run every step in order.
    pub async fn run(&self) -> Result<DeployReport> {
        self.run_steps().instrument(self.span.clone()).await
    }

    async fn run_steps(&self) -> Result<DeployReport> {
        self.ensure_remote_directory().await?;
        self.render_template()?;
        self.transfer_template().await?;
        self.deploy_stack().await?;
        let revisions = self.count_deployed_revisions().await?;
        let version = revisions.next_version();
        let archive_path = self.archive_revision(version).await?;

        Ok(DeployReport {
            stack_name: self.config.stack_name(),
            remote_stack_file: self.config.remote_stack_file(),
            revisions,
            version,
            archive_path,
        })
    }
}
