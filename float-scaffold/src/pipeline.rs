//! Scaffold pipeline entrypoint used by the CLI.
//!
//! resolve → plan → materialize → write → test-framework hook → install.
//! Resolve, render and write failures abort; hook and install failures are
//! collected in the report.

use std::path::PathBuf;

use float_core::{resolve, AnswerSet, FeatureDecisionSet, PackageMeta, TestFramework};
use float_renderer::{ScaffoldPlan, TemplateEngine};

use crate::error::ScaffoldError;
use crate::hook::{self, HookOptions};
use crate::install::{self, StepOutcome};
use crate::writer::{write_plan, WriteResult};

/// Everything a run needs besides the answers.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Project root; created if missing.
    pub root: PathBuf,
    pub test_framework: TestFramework,
    pub pkg: PackageMeta,
    /// Directory of `.tera` overrides.
    pub templates_dir: Option<PathBuf>,
    /// Report what would be written; skips hook and install.
    pub dry_run: bool,
    pub skip_install: bool,
    pub skip_install_message: bool,
}

impl ScaffoldOptions {
    pub fn new(root: impl Into<PathBuf>, pkg: PackageMeta) -> Self {
        ScaffoldOptions {
            root: root.into(),
            test_framework: TestFramework::default(),
            pkg,
            templates_dir: None,
            dry_run: false,
            skip_install: false,
            skip_install_message: false,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct ScaffoldReport {
    pub decisions: FeatureDecisionSet,
    pub writes: Vec<WriteResult>,
    pub hook: Option<StepOutcome>,
    pub install: Vec<StepOutcome>,
    /// True when install did not run (flag or dry run).
    pub install_skipped: bool,
}

impl ScaffoldReport {
    /// Non-fatal failures from the hook and installers.
    pub fn warnings(&self) -> Vec<String> {
        self.hook
            .iter()
            .chain(self.install.iter())
            .filter_map(|o| o.result.as_ref().err())
            .map(|e| e.to_string())
            .collect()
    }
}

/// Run the full pipeline for one set of answers.
pub fn run(answers: &AnswerSet, opts: &ScaffoldOptions) -> Result<ScaffoldReport, ScaffoldError> {
    let decisions = resolve(answers)?;
    tracing::debug!(?decisions, "resolved answers");

    let plan = ScaffoldPlan::build(&decisions, opts.test_framework, &opts.pkg);
    let engine = TemplateEngine::new(opts.templates_dir.as_deref())?;
    let files = engine.materialize(&plan)?;
    let writes = write_plan(&opts.root, &plan.directories, &files, opts.dry_run)?;

    if opts.dry_run {
        return Ok(ScaffoldReport {
            decisions,
            writes,
            hook: None,
            install: Vec::new(),
            install_skipped: true,
        });
    }

    let hook = hook::run_test_framework(
        &opts.root,
        opts.test_framework,
        HookOptions {
            skip_install: opts.skip_install,
            skip_message: opts.skip_install_message,
        },
    );

    let install = if opts.skip_install {
        Vec::new()
    } else {
        install::install_dependencies(&opts.root)
    };

    Ok(ScaffoldReport {
        decisions,
        writes,
        hook,
        install,
        install_skipped: opts.skip_install,
    })
}
