//! `float new [PATH]`: ask the questions and generate a project.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use float_core::{config, AnswerSet, Config, ConfigError, Feature, PackageMeta, TestFramework};
use float_scaffold::{install, pipeline, ScaffoldOptions, ScaffoldReport, WriteResult};

use crate::{banner, prompt};

/// Arguments for `float new`.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project directory; created if missing.
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Read answers from a YAML or JSON file instead of prompting.
    #[arg(long, value_name = "FILE", conflicts_with = "yes")]
    pub answers: Option<PathBuf>,

    /// Do not prompt; use the answer flags below and defaults.
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Site name (defaults to the directory name).
    #[arg(long)]
    pub site_name: Option<String>,

    /// Leave out the Bourbon Sass library.
    #[arg(long)]
    pub no_bourbon: bool,

    /// Feature to include: modernizr, grid, iconfont, webfont. Repeatable.
    #[arg(long = "feature", value_name = "FEATURE")]
    pub features: Vec<String>,

    /// Icon font when `iconfont` is selected: font-awesome, foundicons.
    #[arg(long, value_name = "ID")]
    pub icon_font: Option<String>,

    /// Web font when `webfont` is selected: open-sans.
    #[arg(long, value_name = "ID")]
    pub web_font: Option<String>,

    /// Test framework for the build script and sub-generator.
    #[arg(long, value_name = "NAME")]
    pub test_framework: Option<TestFramework>,

    /// Directory of `.tera` files overriding the built-in templates.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Do not run `npm install` / `bower install`.
    #[arg(long)]
    pub skip_install: bool,

    /// Do not print the install hint when install is skipped.
    #[arg(long)]
    pub skip_install_message: bool,

    /// Do not print the welcome banner.
    #[arg(long)]
    pub skip_welcome_message: bool,

    /// Show what would be written without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl NewArgs {
    pub fn run(self) -> Result<()> {
        let home = dirs::home_dir();
        let config = load_config(home.as_deref())?;

        if !(self.skip_welcome_message || config.skip_welcome_message) {
            banner::print_welcome();
        }

        let mut answers = self.collect_answers()?;
        warn_unknown_features(&answers);
        if answers.site_name.trim().is_empty() {
            answers.site_name = default_site_name(&self.path)?;
        }

        let mut opts = ScaffoldOptions::new(
            &self.path,
            PackageMeta::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        );
        opts.test_framework = self
            .test_framework
            .or(config.test_framework)
            .unwrap_or_default();
        opts.templates_dir = self
            .templates
            .clone()
            .or_else(|| home.as_deref().and_then(|h| config.resolved_templates_dir_at(h)))
            .or_else(|| config.templates_dir.clone());
        opts.dry_run = self.dry_run;
        opts.skip_install = self.skip_install || config.skip_install;
        opts.skip_install_message = self.skip_install_message;

        let report = pipeline::run(&answers, &opts)
            .with_context(|| format!("failed to scaffold '{}'", self.path.display()))?;

        print_report(&report, &opts);
        Ok(())
    }

    fn collect_answers(&self) -> Result<AnswerSet> {
        if let Some(file) = &self.answers {
            let raw = std::fs::read_to_string(file)
                .with_context(|| format!("cannot read answers file '{}'", file.display()))?;
            let answers: AnswerSet = serde_yaml::from_str(&raw)
                .with_context(|| format!("cannot parse answers file '{}'", file.display()))?;
            return Ok(answers);
        }

        let from_flags = self.answers_from_flags();
        if self.yes {
            return Ok(from_flags);
        }

        let mut defaults = from_flags;
        if defaults.site_name.is_empty() {
            defaults.site_name = default_site_name(&self.path)?;
        }
        prompt::ask(&defaults)
    }

    fn answers_from_flags(&self) -> AnswerSet {
        AnswerSet {
            site_name: self.site_name.clone().unwrap_or_default(),
            include_bourbon: !self.no_bourbon,
            features: self.features.clone(),
            which_icon_font: self.icon_font.clone(),
            which_web_font: self.web_font.clone(),
        }
    }
}

fn load_config(home: Option<&Path>) -> Result<Config> {
    let Some(home) = home else {
        return Ok(Config::default());
    };
    match config::load_at(home) {
        Ok(cfg) => Ok(cfg),
        Err(ConfigError::HomeNotFound) => Ok(Config::default()),
        Err(e) => Err(e).context("failed to load ~/.float/config.yaml"),
    }
}

fn default_site_name(path: &Path) -> Result<String> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let abs = cwd.join(path);
    Ok(abs
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string()))
}

fn warn_unknown_features(answers: &AnswerSet) {
    for token in &answers.features {
        if token.parse::<Feature>().is_err() {
            eprintln!(
                "{} ignoring unknown feature '{}'",
                "warning:".yellow().bold(),
                token
            );
        }
    }
}

fn print_report(report: &ScaffoldReport, opts: &ScaffoldOptions) {
    let prefix = if opts.dry_run { "[dry-run] " } else { "" };
    for w in &report.writes {
        let rel = w.path().strip_prefix(&opts.root).unwrap_or(w.path());
        match w {
            WriteResult::Created { .. } => println!("   {} {}", "create".green(), rel.display()),
            WriteResult::Overwritten { .. } => println!("    {} {}", "force".yellow(), rel.display()),
            WriteResult::Identical { .. } => println!("{} {}", "identical".cyan(), rel.display()),
            WriteResult::WouldWrite { .. } => println!("    {} {}", "would".bright_black(), rel.display()),
        }
    }

    println!(
        "{prefix}✓ '{}' scaffolded in {} ({} files)",
        report.decisions.site_name,
        opts.root.display(),
        report.writes.len()
    );

    for warning in report.warnings() {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }

    if report.install_skipped && !opts.dry_run && !opts.skip_install_message {
        println!("{}", install::skipped_message());
    }
}
