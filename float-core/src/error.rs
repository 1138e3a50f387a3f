//! Error types for float-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Feature;

/// Errors raised while turning raw answers into feature decisions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// A gating feature was selected but its dependent choice is missing or
    /// not one of the enumerated values.
    #[error("invalid selection for '{feature}': {}", describe_choice(.choice, .expected))]
    InvalidSelection {
        feature: Feature,
        choice: Option<String>,
        expected: Vec<&'static str>,
    },
}

fn describe_choice(choice: &Option<String>, expected: &[&'static str]) -> String {
    let expected = expected.join(", ");
    match choice {
        Some(c) => format!("'{c}' is not one of {expected}"),
        None => format!("no choice given; expected one of {expected}"),
    }
}

/// Errors from loading the user config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure other than the file being absent.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load, with file path and serde_yaml context.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
