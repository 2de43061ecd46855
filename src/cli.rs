// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Four required flags; connection settings are fixed defaults.

use clap::Parser;
use stackship::types::{AppName, RemoteHost, Stage};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "stackship")]
#[command(about = "Generate and deploy a stack file to a remote server")]
#[command(version)]
pub struct Cli {
    /// Application name, used in the remote directory and stack name
    #[arg(long = "app_name", value_name = "NAME")]
    pub app_name: AppName,

    /// YAML stack template; rewritten in place with environment variables substituted
    #[arg(long = "placeholder_file_path", value_name = "PATH")]
    pub placeholder_file_path: PathBuf,

    /// Host running the Docker swarm manager
    #[arg(long = "remote_address", value_name = "HOST")]
    pub remote_address: RemoteHost,

    /// Deployment stage, e.g. staging or prod
    #[arg(long, value_name = "STAGE")]
    pub stage: Stage,
}
