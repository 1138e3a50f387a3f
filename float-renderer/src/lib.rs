//! # float-renderer
//!
//! Builds the render context and file plan from feature decisions, and turns
//! the plan into file contents with embedded Tera templates.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use float_core::{resolve, AnswerSet, PackageMeta, TestFramework};
//! use float_renderer::{ScaffoldPlan, TemplateEngine};
//!
//! fn render(answers: &AnswerSet) {
//!     let Ok(decisions) = resolve(answers) else { return };
//!     let plan = ScaffoldPlan::build(&decisions, TestFramework::Mocha, &PackageMeta::new("float", "0.1.0"));
//!     if let Ok(engine) = TemplateEngine::new(None) {
//!         if let Ok(files) = engine.materialize(&plan) {
//!             for file in files {
//!                 println!("{}: {} bytes", file.path.display(), file.content.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod inject;
pub mod plan;

pub use context::RenderContext;
pub use engine::{RenderedFile, TemplateEngine};
pub use error::RenderError;
pub use inject::{append_files, AssetBlock, AssetType};
pub use plan::{FileOp, FileSource, ScaffoldPlan};
