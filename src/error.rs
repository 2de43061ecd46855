// ABOUTME: Application-wide error types for stackship.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::remote::RemoteCommandError;
use crate::template::TemplateRenderError;
use crate::types::ArgumentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    Argument(#[from] ArgumentError),

    #[error("template rendering failed: {0}")]
    TemplateRender(#[from] TemplateRenderError),

    #[error("remote command failed: {0}")]
    RemoteCommand(#[from] RemoteCommandError),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A command-line value was missing or malformed.
    Argument,
    /// The template could not be read, parsed or written.
    TemplateRender,
    /// An ssh, rsync or remote docker command failed.
    RemoteCommand,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Argument(_) => ErrorKind::Argument,
            Error::TemplateRender(_) => ErrorKind::TemplateRender,
            Error::RemoteCommand(_) => ErrorKind::RemoteCommand,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
