//! Full build handler.

use wxbuild_core::{BuildSummary, CommandRunner, Orchestrator};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{BOLD, RESET};
use crate::reporter::TerminalReporter;

/// Execute the nine-step build and print a summary.
pub fn execute(ctx: &CliContext, runner: &dyn CommandRunner) -> Result<BuildSummary, CliError> {
    println!(
        "{BOLD}Building wxWidgets media player in {}{RESET}\n",
        ctx.project_dir.display()
    );

    let orchestrator = Orchestrator::new(
        runner,
        &TerminalReporter,
        &ctx.project_dir,
        ctx.settings.clone(),
    )?;
    let summary = orchestrator.run()?;

    print_summary(&summary);
    Ok(summary)
}

fn print_summary(summary: &BuildSummary) {
    println!();
    if summary.installed.is_empty() {
        println!("Dependencies: all {} already installed", summary.already_present.len());
    } else {
        println!("Installed: {}", summary.installed.join(", "));
    }
    if !summary.toolkit_version.is_empty() {
        println!("wxWidgets:    {}", summary.toolkit_version);
    }
    println!("Jobs:         {} ({})", summary.jobs, summary.job_source);
    println!("Output:       {}", summary.output_dir.display());
}
