// ABOUTME: Stack template rendering from environment variables.
// ABOUTME: Expands $NAME/${NAME} references then round-trips the result through YAML.

mod error;
mod expand;
mod octal;
mod render;

pub use error::{Result, TemplateRenderError};
pub use expand::{expand_env, expand_vars};
pub use octal::normalize_octal_ints;
pub use render::{render_file, render_str};
