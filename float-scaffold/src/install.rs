//! Dependency installation: `npm install`, then `bower install`.
//!
//! Both run as blocking child processes in the project root. A failure is
//! recorded in the returned [`StepOutcome`] and logged; it never aborts the
//! run and never touches files already written.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::InstallError;

/// One external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub program: String,
    pub args: Vec<String>,
}

impl Step {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Step {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// `program arg1 arg2`, for messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of running one [`Step`].
#[derive(Debug)]
pub struct StepOutcome {
    pub step: Step,
    pub result: Result<(), InstallError>,
}

/// The install commands, in order.
pub fn install_steps() -> Vec<Step> {
    vec![Step::new("npm", &["install"]), Step::new("bower", &["install"])]
}

/// Hint printed when install is skipped.
pub fn skipped_message() -> String {
    let cmds: Vec<String> = install_steps().iter().map(Step::display).collect();
    format!(
        "I'm all done. Just run `{}` to install the required dependencies.",
        cmds.join(" && ")
    )
}

/// Run `step` in `dir`, inheriting stdout/stderr.
pub fn run_step(dir: &Path, step: &Step) -> Result<(), InstallError> {
    tracing::info!("running `{}` in {}", step.display(), dir.display());
    let status = Command::new(&step.program)
        .args(&step.args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .status()
        .map_err(|source| InstallError::Spawn {
            program: step.program.clone(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(InstallError::Failed {
            program: step.program.clone(),
            status,
        })
    }
}

/// Run every step regardless of earlier failures.
pub fn run_steps(dir: &Path, steps: Vec<Step>) -> Vec<StepOutcome> {
    steps
        .into_iter()
        .map(|step| {
            let result = run_step(dir, &step);
            if let Err(e) = &result {
                tracing::warn!("{e}");
            }
            StepOutcome { step, result }
        })
        .collect()
}

/// Install project dependencies in `dir`.
pub fn install_dependencies(dir: &Path) -> Vec<StepOutcome> {
    run_steps(dir, install_steps())
}
