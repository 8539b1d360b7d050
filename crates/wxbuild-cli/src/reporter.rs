//! Terminal step reporter.

use wxbuild_core::{BuildStep, StepReporter};

use crate::presentation::{BOLD, GREEN, RED, RESET};

/// Prints `[n/9] description` lines as the build advances.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalReporter;

impl StepReporter for TerminalReporter {
    fn step_started(&self, step: BuildStep) {
        println!("{BOLD}{step}{RESET}");
    }

    fn message(&self, msg: &str) {
        println!("    {msg}");
    }

    fn step_finished(&self, step: BuildStep) {
        if step == BuildStep::Compile {
            println!("{GREEN}✓ Build completed successfully{RESET}");
        }
    }

    // The diagnostic itself is printed once by `main`.
    fn step_failed(&self, step: BuildStep, _msg: &str) {
        eprintln!("{}", failure_line(step));
    }
}

fn failure_line(step: BuildStep) -> String {
    format!("{RED}✗ {step} failed{RESET}")
}
