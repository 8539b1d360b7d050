//! Check build dependencies handler.
//!
//! Probes the package manager, every required package and the toolkit
//! query tool without installing anything, and prints a status table.

mod display;

use wxbuild_core::{CommandRunner, NoopReporter, Orchestrator};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{BLUE, BOLD, GREEN, RED, RESET, rule};

use display::{print_dependency, print_header, print_tool};

/// Execute the check-deps command.
///
/// Returns an error if the package manager, any package, or the toolkit
/// query tool is missing.
pub fn execute(ctx: &CliContext, runner: &dyn CommandRunner) -> Result<(), CliError> {
    println!("{BOLD}{BLUE}Checking build dependencies...{RESET}\n");

    let orchestrator =
        Orchestrator::new(runner, &NoopReporter, &ctx.project_dir, ctx.settings.clone())?;
    let manager = ctx.settings.effective_package_manager();
    let toolkit_config = ctx.settings.effective_toolkit_config();

    print_header();

    if let Err(err) = orchestrator.check_package_manager() {
        print_tool(manager, false);
        println!("{}", rule('='));
        return Err(err.into());
    }
    print_tool(manager, true);

    let dependencies = orchestrator.probe_dependencies()?;
    for dep in &dependencies {
        print_dependency(dep);
    }

    let toolkit_ok = orchestrator.check_toolkit_config().is_ok();
    print_tool(toolkit_config, toolkit_ok);

    let mut missing: Vec<String> = dependencies
        .iter()
        .filter(|d| !d.is_present())
        .map(|d| d.name.clone())
        .collect();
    if !toolkit_ok {
        missing.push(toolkit_config.to_string());
    }

    println!("{}", rule('='));
    if missing.is_empty() {
        println!(
            "{GREEN}✓ All build dependencies are installed!{RESET} ({}/{})",
            dependencies.len(),
            dependencies.len()
        );
        Ok(())
    } else {
        println!(
            "{RED}✗ {} missing.{RESET} Run `wxbuild` to install them with {manager}.",
            missing.len()
        );
        Err(CliError::MissingDependencies(missing))
    }
}
