//! # float-scaffold
//!
//! Writes a rendered plan to disk and drives the external collaborators
//! (dependency installers, test-framework sub-generator).
//!
//! Call [`pipeline::run`] for the full resolve → render → write → hook →
//! install sequence.

pub mod error;
pub mod hook;
pub mod install;
pub mod pipeline;
pub mod writer;

pub use error::{InstallError, ScaffoldError};
pub use pipeline::{run, ScaffoldOptions, ScaffoldReport};
pub use writer::{write_plan, WriteResult};
