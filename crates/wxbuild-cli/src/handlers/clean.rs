//! Clean handler: remove stale configuration output only.

use wxbuild_core::{BuildStep, CommandRunner, Orchestrator, StepReporter};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{GREEN, RESET};
use crate::reporter::TerminalReporter;

/// Execute the clean command.
pub fn execute(ctx: &CliContext, runner: &dyn CommandRunner) -> Result<(), CliError> {
    let reporter = TerminalReporter;
    let orchestrator =
        Orchestrator::new(runner, &reporter, &ctx.project_dir, ctx.settings.clone())?;

    reporter.step_started(BuildStep::CleanArtifacts);
    let removed = orchestrator.clean_artifacts()?;
    println!("{GREEN}✓ Removed {} item(s){RESET}", removed.len());
    Ok(())
}
