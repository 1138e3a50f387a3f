//! Tera rendering engine: embedded templates, static files, and
//! [`TemplateEngine::materialize`] which turns a [`ScaffoldPlan`] into
//! file contents.

use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::inject::append_files;
use crate::plan::{FileSource, ScaffoldPlan};

// ---------------------------------------------------------------------------
// Embedded templates: baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("gulpfile.js.tera", include_str!("templates/gulpfile.js.tera")),
    ("package.json.tera", include_str!("templates/package.json.tera")),
    ("index.html.tera", include_str!("templates/index.html.tera")),
];

const STATICS: &[(&str, &str)] = &[
    ("gitignore", include_str!("templates/static/gitignore")),
    ("gitattributes", include_str!("templates/static/gitattributes")),
    ("bowerrc", include_str!("templates/static/bowerrc")),
    ("bower.json", include_str!("templates/static/bower.json")),
    ("jshintrc", include_str!("templates/static/jshintrc")),
    ("editorconfig", include_str!("templates/static/editorconfig")),
    ("style.scss", include_str!("templates/static/style.scss")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

/// Read the override for `name` from `dir`, if one exists. Only names in
/// [`TPLS`] are looked up; other files in `dir` are never read.
fn user_override(dir: &Path, name: &str) -> Result<Option<String>, RenderError> {
    let path = dir.join(name);
    if !path.is_file() {
        return Ok(None);
    }
    std::fs::read_to_string(&path)
        .map(Some)
        .map_err(|e| io_err(&path, e))
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut items: Vec<(&str, String)> = Vec::with_capacity(TPLS.len());
    for (name, embedded) in TPLS {
        let content = match user_template_dir {
            Some(dir) => user_override(dir, name)?,
            None => None,
        };
        items.push((*name, content.unwrap_or_else(|| (*embedded).to_string())));
    }

    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(items)?;
    Ok(tera)
}

fn static_content(name: &str) -> Result<&'static str, RenderError> {
    STATICS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, content)| *content)
        .ok_or_else(|| RenderError::UnknownStatic(name.to_string()))
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// A file ready to be written, path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Tera-based engine for rendering templates with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults by name (e.g. `index.html.tera`). Static files are never
/// overridden.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render a single named template.
    pub fn render_template(&self, name: &str, ctx: &RenderContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(name, &tera_ctx)?)
    }

    /// Produce the content of every file in `plan`, in plan order.
    pub fn materialize(&self, plan: &ScaffoldPlan) -> Result<Vec<RenderedFile>, RenderError> {
        let tera_ctx = plan.context.to_tera_context()?;
        let mut files = Vec::with_capacity(plan.operations.len());
        for op in &plan.operations {
            let content = match &op.source {
                FileSource::Template(name) => self.tera.render(name, &tera_ctx)?,
                FileSource::TemplateWithAssets { template, assets } => {
                    let html = self.tera.render(template, &tera_ctx)?;
                    append_files(&html, assets)
                }
                FileSource::Static(name) => static_content(name)?.to_string(),
                FileSource::Inline(content) => (*content).to_string(),
            };
            files.push(RenderedFile {
                path: op.destination.clone(),
                content,
            });
        }
        Ok(files)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_core::{FeatureDecisionSet, IconFont, PackageMeta, TestFramework, WebFont};

    fn decisions(all: bool) -> FeatureDecisionSet {
        FeatureDecisionSet {
            site_name: "Acme <Shop>".to_string(),
            include_bourbon: all,
            include_modernizr: all,
            include_grid: all,
            icon_font: all.then_some(IconFont::FontAwesome),
            web_font: all.then_some(WebFont::OpenSans),
        }
    }

    fn plan(all: bool, fw: TestFramework) -> ScaffoldPlan {
        ScaffoldPlan::build(&decisions(all), fw, &PackageMeta::new("float-cli", "0.1.0"))
    }

    fn file<'a>(files: &'a [RenderedFile], path: &str) -> &'a str {
        &files
            .iter()
            .find(|f| f.path == Path::new(path))
            .unwrap_or_else(|| panic!("{path} not rendered"))
            .content
    }

    #[test]
    fn engine_new_succeeds() {
        TemplateEngine::new(None).expect("embedded templates must parse");
    }

    #[test]
    fn every_planned_static_is_embedded() {
        for op in &plan(false, TestFramework::Mocha).operations {
            if let FileSource::Static(name) = op.source {
                static_content(name).unwrap_or_else(|e| panic!("{e}"));
            }
        }
    }

    #[test]
    fn index_has_title_and_script_block() {
        let engine = TemplateEngine::new(None).unwrap();
        let files = engine.materialize(&plan(false, TestFramework::Mocha)).unwrap();
        let index = file(&files, "app/index.html");
        assert!(index.contains("<title>Acme &lt;Shop&gt;</title>"), "{index}");
        let block = index.find("<!-- build:js scripts/app.js -->").expect("block");
        assert!(block < index.find("</body>").unwrap());
        assert!(!index.contains("modernizr"));
        assert!(!index.contains("font-awesome"));
    }

    #[test]
    fn features_change_index_content() {
        let engine = TemplateEngine::new(None).unwrap();
        let files = engine.materialize(&plan(true, TestFramework::Mocha)).unwrap();
        let index = file(&files, "app/index.html");
        assert!(index.contains("bower_components/modernizr/modernizr.js"));
        assert!(index.contains("bower_components/font-awesome/css/font-awesome.css"));
        assert!(index.contains("fonts.googleapis.com/css?family=Open+Sans"));
    }

    #[test]
    fn bourbon_and_grid_reach_build_script() {
        let engine = TemplateEngine::new(None).unwrap();
        let on = engine.materialize(&plan(true, TestFramework::Mocha)).unwrap();
        let gulp = file(&on, "gulpfile.js");
        assert!(gulp.contains("require('node-bourbon')"));
        assert!(gulp.contains("require('node-neat')"));

        let off = engine.materialize(&plan(false, TestFramework::Mocha)).unwrap();
        let gulp = file(&off, "gulpfile.js");
        assert!(!gulp.contains("node-bourbon"));
        assert!(!gulp.contains("node-neat"));
    }

    #[test]
    fn test_task_follows_framework() {
        let engine = TemplateEngine::new(None).unwrap();
        let mocha = engine.materialize(&plan(false, TestFramework::Mocha)).unwrap();
        assert!(file(&mocha, "gulpfile.js").contains("$.mocha("));
        assert!(file(&mocha, "package.json").contains("\"gulp-mocha\""));
        let jasmine = engine.materialize(&plan(false, TestFramework::Jasmine)).unwrap();
        assert!(file(&jasmine, "gulpfile.js").contains("$.jasmine("));
        assert!(file(&jasmine, "package.json").contains("\"gulp-jasmine\""));
        let none = engine.materialize(&plan(false, TestFramework::None)).unwrap();
        assert!(!file(&none, "gulpfile.js").contains("gulp.task('test'"));
        assert!(!file(&none, "package.json").contains("gulp-mocha"));
    }

    #[test]
    fn app_js_is_fixed_content() {
        let engine = TemplateEngine::new(None).unwrap();
        let files = engine.materialize(&plan(true, TestFramework::Mocha)).unwrap();
        assert_eq!(file(&files, "app/scripts/app.js"), crate::plan::APP_JS);
    }

    #[test]
    fn no_crlf_in_any_rendered_output() {
        let engine = TemplateEngine::new(None).unwrap();
        for all in [false, true] {
            for file in engine.materialize(&plan(all, TestFramework::Mocha)).unwrap() {
                assert!(
                    !file.content.contains('\r'),
                    "{} contains CR char: line endings not normalised",
                    file.path.display()
                );
            }
        }
    }
}
