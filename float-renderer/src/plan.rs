//! Scaffold plan: the ordered file operations for one generator run.
//!
//! | Destination             | Source                                   |
//! |-------------------------|------------------------------------------|
//! | `gulpfile.js`           | template `gulpfile.js.tera`              |
//! | `package.json`          | template `package.json.tera`             |
//! | `.gitignore`            | static `gitignore`                       |
//! | `.gitattributes`        | static `gitattributes`                   |
//! | `.bowerrc`              | static `bowerrc`                         |
//! | `bower.json`            | static `bower.json`                      |
//! | `.jshintrc`             | static `jshintrc`                        |
//! | `.editorconfig`         | static `editorconfig`                    |
//! | `app/styles/style.scss` | static `style.scss`                      |
//! | `app/index.html`        | template `index.html.tera` + asset block |
//! | `app/scripts/app.js`    | inline                                   |

use std::path::PathBuf;

use float_core::{FeatureDecisionSet, PackageMeta, TestFramework};

use crate::context::RenderContext;
use crate::inject::AssetBlock;

/// Fixed content of the generated JS entry point.
pub const APP_JS: &str = "console.log('Welcome to Float!');\n";

/// Directories created before any file is written, relative to the project root.
pub const DIRECTORIES: &[&str] = &["app", "app/scripts", "app/styles", "app/images"];

/// Where a file's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Rendered with the [`RenderContext`].
    Template(&'static str),
    /// Rendered, then post-processed by inserting an asset block.
    TemplateWithAssets {
        template: &'static str,
        assets: AssetBlock,
    },
    /// Copied verbatim from an embedded static file.
    Static(&'static str),
    /// Fixed content.
    Inline(&'static str),
}

/// One file operation in the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOp {
    pub source: FileSource,
    /// Relative to the project root.
    pub destination: PathBuf,
    /// Whether the file depends on a feature flag. No current feature gates a
    /// whole file; flags only change rendered content.
    pub conditional: bool,
}

impl FileOp {
    fn always(source: FileSource, destination: &str) -> Self {
        FileOp {
            source,
            destination: PathBuf::from(destination),
            conditional: false,
        }
    }
}

/// Context plus the ordered operations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub context: RenderContext,
    pub directories: Vec<PathBuf>,
    pub operations: Vec<FileOp>,
}

impl ScaffoldPlan {
    /// Build the plan. No side effects.
    pub fn build(
        decisions: &FeatureDecisionSet,
        test_framework: TestFramework,
        pkg: &PackageMeta,
    ) -> Self {
        let context = RenderContext::build(decisions, test_framework, pkg);
        let operations = vec![
            FileOp::always(FileSource::Template("gulpfile.js.tera"), "gulpfile.js"),
            FileOp::always(FileSource::Template("package.json.tera"), "package.json"),
            FileOp::always(FileSource::Static("gitignore"), ".gitignore"),
            FileOp::always(FileSource::Static("gitattributes"), ".gitattributes"),
            FileOp::always(FileSource::Static("bowerrc"), ".bowerrc"),
            FileOp::always(FileSource::Static("bower.json"), "bower.json"),
            FileOp::always(FileSource::Static("jshintrc"), ".jshintrc"),
            FileOp::always(FileSource::Static("editorconfig"), ".editorconfig"),
            FileOp::always(FileSource::Static("style.scss"), "app/styles/style.scss"),
            FileOp::always(
                FileSource::TemplateWithAssets {
                    template: "index.html.tera",
                    assets: AssetBlock::app_script(),
                },
                "app/index.html",
            ),
            FileOp::always(FileSource::Inline(APP_JS), "app/scripts/app.js"),
        ];

        ScaffoldPlan {
            context,
            directories: DIRECTORIES.iter().map(PathBuf::from).collect(),
            operations,
        }
    }

    /// Destination paths in plan order.
    pub fn destinations(&self) -> Vec<&PathBuf> {
        self.operations.iter().map(|op| &op.destination).collect()
    }
}
