//! Optional user config at `~/.float/config.yaml`.
//!
//! # API pattern
//!
//! - `fn_at(home: &Path, …)`: explicit home; used in tests with `TempDir`
//! - `fn(…)`: derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! A missing file is not an error: every field has a default and CLI flags
//! take precedence over whatever is loaded here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::TestFramework;

/// User-level defaults for `float new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Test framework used when `--test-framework` is not passed.
    pub test_framework: Option<TestFramework>,
    /// Directory of `.tera` files overriding the embedded templates.
    pub templates_dir: Option<PathBuf>,
    /// Never run `npm install` / `bower install`.
    pub skip_install: bool,
    /// Never print the welcome banner.
    pub skip_welcome_message: bool,
}

/// `<home>/.float/`
pub fn float_dir_at(home: &Path) -> PathBuf {
    home.join(".float")
}

/// `<home>/.float/config.yaml`: pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    float_dir_at(home).join("config.yaml")
}

/// `<home>/.float/templates/`: default template override directory.
pub fn default_templates_dir_at(home: &Path) -> PathBuf {
    float_dir_at(home).join("templates")
}

/// Load the config under `home`, falling back to defaults when absent.
///
/// Returns `ConfigError::Parse` (with path) if the file is malformed.
pub fn load_at(home: &Path) -> Result<Config, ConfigError> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<Config, ConfigError> {
    load_at(&home()?)
}

impl Config {
    /// Template override directory: the configured one, else
    /// `<home>/.float/templates` when it exists.
    pub fn resolved_templates_dir_at(&self, home: &Path) -> Option<PathBuf> {
        if let Some(dir) = &self.templates_dir {
            return Some(dir.clone());
        }
        let fallback = default_templates_dir_at(home);
        fallback.is_dir().then_some(fallback)
    }
}

fn home() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::HomeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let home = TempDir::new().unwrap();
        let config = load_at(home.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn fallback_templates_dir_only_when_present() {
        let home = TempDir::new().unwrap();
        let config = Config::default();
        assert!(config.resolved_templates_dir_at(home.path()).is_none());

        std::fs::create_dir_all(default_templates_dir_at(home.path())).unwrap();
        assert_eq!(
            config.resolved_templates_dir_at(home.path()),
            Some(default_templates_dir_at(home.path()))
        );
    }
}
