// ABOUTME: Validated domain types for deployment targets.
// ABOUTME: Invalid values are rejected as argument errors before any remote contact.

mod name;
mod remote_host;

pub use name::{AppName, Stage};
pub use remote_host::RemoteHost;

use std::path::PathBuf;
use thiserror::Error;

/// A command-line value that cannot be used to build a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} cannot start with '{ch}'")]
    InvalidStart { field: &'static str, ch: char },

    #[error("invalid character in {field}: '{ch}'")]
    InvalidChar { field: &'static str, ch: char },

    #[error("template path does not name a file: {0}")]
    NotAFilePath(PathBuf),
}
