// ABOUTME: YAML template rendering: substitute, parse, re-serialize.
// ABOUTME: Mapping order is kept as written; scalar types follow the substituted text.

use super::error::{Result, TemplateRenderError};
use super::expand::{env_lookup, expand_vars};
use super::octal::normalize_octal_ints;
use std::path::Path;

/// Expand variables in `input` and normalize it through a YAML round-trip.
///
/// Plain octal integers such as `0440` are written back as decimal
/// integers, the way YAML 1.1 loaders read them.
///
/// Fails if the expanded text is not a single valid YAML document.
pub fn render_str<F>(input: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let expanded = expand_vars(input, lookup);
    let expanded = normalize_octal_ints(&expanded);
    let document: serde_yaml::Value = serde_yaml::from_str(&expanded)
        .map_err(|source| TemplateRenderError::Parse { path: None, source })?;
    serde_yaml::to_string(&document).map_err(TemplateRenderError::Serialize)
}

/// Render the template at `path` against the process environment and
/// overwrite it with the result.
///
/// The file is left untouched if reading or parsing fails.
pub fn render_file(path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path).map_err(|source| TemplateRenderError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let rendered = render_str(&content, env_lookup).map_err(|e| e.with_path(path))?;

    std::fs::write(path, rendered).map_err(|source| TemplateRenderError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "template rendered");
    Ok(())
}
