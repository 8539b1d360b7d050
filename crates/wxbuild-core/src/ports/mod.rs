//! Port definitions.
//!
//! Core owns the traits; adapters own the implementations. The CLI wires a
//! concrete runner and reporter into the orchestrator at its composition root.

mod command_runner;
mod step_reporter;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec, CommandStatus, RunnerError};
pub use step_reporter::{NoopReporter, StepReporter};
