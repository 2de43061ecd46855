// ABOUTME: Template rendering error types.
// ABOUTME: Covers reading, parsing, serializing and writing the stack template.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateRenderError {
    #[error("failed to read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template {} is not valid YAML after substitution: {source}", display_path(.path))]
    Parse {
        path: Option<PathBuf>,
        source: serde_yaml::Error,
    },

    #[error("failed to serialize rendered template: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("failed to write rendered template {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<input>".to_string())
}

impl TemplateRenderError {
    /// Attach the template path to a parse error raised on in-memory text.
    pub(crate) fn with_path(self, template: &std::path::Path) -> Self {
        match self {
            TemplateRenderError::Parse { path: None, source } => TemplateRenderError::Parse {
                path: Some(template.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateRenderError>;
