//! Error types for float-scaffold.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use float_core::ResolveError;
use float_renderer::RenderError;

/// Errors that abort a scaffold run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The answers did not resolve into a valid feature set.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// A directory or file could not be created or written.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of external processes (installers, the test-framework
/// sub-generator). Reported, never fatal.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Convenience constructor for [`ScaffoldError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ScaffoldError {
    ScaffoldError::Io {
        path: path.into(),
        source,
    }
}
