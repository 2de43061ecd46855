// ABOUTME: Entry point for the stackship CLI application.
// ABOUTME: Parses arguments, sets up logging and runs the deployment steps.

mod cli;

use clap::Parser;
use cli::Cli;
use stackship::config::DeployConfig;
use stackship::deploy::{DeployReport, StackDeployer};
use stackship::error::{ErrorKind, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            if e.use_stderr() {
                tracing::error!("{}", e.to_string().trim_end());
            }
            e.exit();
        }
    };

    if let Err(e) = run(cli).await {
        tracing::error!("{e}");
        let code = match e.kind() {
            ErrorKind::Argument => 2,
            ErrorKind::TemplateRender | ErrorKind::RemoteCommand => 1,
        };
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<DeployReport> {
    let config = DeployConfig::new(
        cli.app_name,
        cli.placeholder_file_path,
        cli.remote_address,
        cli.stage,
    )?;

    let report = StackDeployer::new(config).run().await?;
    tracing::info!(
        stack = %report.stack_name,
        version = report.version,
        archive = %report.archive_path,
        "Deployment complete"
    );
    Ok(report)
}
