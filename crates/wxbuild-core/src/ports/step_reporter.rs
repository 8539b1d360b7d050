//! Progress reporting abstraction for build runs.
//!
//! The orchestrator announces each step through this trait so the CLI can
//! print numbered progress lines without the core knowing about terminals.

use crate::domain::BuildStep;

/// Trait for receiving step-level progress during a build run.
pub trait StepReporter: Send + Sync {
    /// Called when a step begins.
    fn step_started(&self, step: BuildStep);

    /// Called to surface an informational line within the current step.
    fn message(&self, msg: &str);

    /// Called when a step completes successfully.
    fn step_finished(&self, step: BuildStep);

    /// Called when a step aborts the run.
    fn step_failed(&self, step: BuildStep, msg: &str);
}

/// A reporter that ignores all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl StepReporter for NoopReporter {
    fn step_started(&self, _step: BuildStep) {}
    fn message(&self, _msg: &str) {}
    fn step_finished(&self, _step: BuildStep) {}
    fn step_failed(&self, _step: BuildStep, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_reporter_does_not_panic() {
        let reporter = NoopReporter;
        reporter.step_started(BuildStep::WriteMacros);
        reporter.message("hello");
        reporter.step_finished(BuildStep::WriteMacros);
        reporter.step_failed(BuildStep::Compile, "boom");
    }
}
