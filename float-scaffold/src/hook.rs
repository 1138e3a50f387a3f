//! Delegated test-framework sub-generator (`yo mocha:app`, `yo jasmine:app`).

use std::path::Path;

use float_core::TestFramework;

use crate::install::{run_step, Step, StepOutcome};

/// Options forwarded to the sub-generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookOptions {
    pub skip_install: bool,
    pub skip_message: bool,
}

/// The sub-generator command, or `None` for [`TestFramework::None`].
pub fn hook_step(framework: TestFramework, opts: HookOptions) -> Option<Step> {
    let namespace = framework.generator()?;
    let mut args = vec![namespace.as_str()];
    if opts.skip_install {
        args.push("--skip-install");
    }
    if opts.skip_message {
        args.push("--skip-message");
    }
    Some(Step::new("yo", &args))
}

/// Run the sub-generator in `dir`. Failure is logged and returned, not raised.
pub fn run_test_framework(
    dir: &Path,
    framework: TestFramework,
    opts: HookOptions,
) -> Option<StepOutcome> {
    let step = hook_step(framework, opts)?;
    let result = run_step(dir, &step);
    if let Err(e) = &result {
        tracing::warn!("test framework hook failed: {e}");
    }
    Some(StepOutcome { step, result })
}
