//! Error types for float-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera failure: template syntax error, missing context key, bad filter.
    #[error("template render error: {0}")]
    Template(#[from] tera::Error),

    /// JSON serialization error (building tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// A plan referenced a static file that is not embedded.
    #[error("unknown static file '{0}'")]
    UnknownStatic(String),
}
