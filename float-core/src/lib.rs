//! Float core library: answer types, feature resolution, user config.
//!
//! - [`types`]: answer set, closed feature/font enums, decision set
//! - [`resolver`]: [`resolve`] answers into a [`FeatureDecisionSet`]
//! - [`config`]: optional `~/.float/config.yaml`
//! - [`error`]: [`ResolveError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod resolver;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, ResolveError};
pub use resolver::resolve;
pub use types::{
    AnswerSet, Feature, FeatureDecisionSet, IconFont, PackageMeta, TestFramework, WebFont,
};
