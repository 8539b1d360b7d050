//! `std::process` implementation of the command runner port.

use std::io;
use std::process::Command;

use tracing::debug;
use wxbuild_core::{CommandOutput, CommandRunner, CommandSpec, CommandStatus, RunnerError};

use crate::stream::{print_line, spinner_for, stream_child};

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy)]
pub struct SystemCommandRunner {
    spinner: bool,
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCommandRunner {
    /// Runner that shows a spinner while streaming.
    pub const fn new() -> Self {
        Self { spinner: true }
    }

    /// Toggle the spinner shown under streamed output. Output is printed
    /// either way; pass `false` when stderr is not a terminal.
    #[must_use]
    pub const fn with_spinner(mut self, spinner: bool) -> Self {
        self.spinner = spinner;
        self
    }
}

/// Build a `Command` from a spec: arguments, working directory, environment.
pub(crate) fn build_command(spec: &CommandSpec) -> Command {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);
    if let Some(dir) = &spec.cwd {
        cmd.current_dir(dir);
    }
    for (key, value) in &spec.env {
        cmd.env(key, value);
    }
    cmd
}

/// Map a spawn failure onto the port's error type.
pub(crate) fn spawn_error(spec: &CommandSpec, err: io::Error) -> RunnerError {
    if err.kind() == io::ErrorKind::NotFound {
        RunnerError::NotFound {
            program: spec.program.clone(),
        }
    } else {
        RunnerError::Spawn {
            program: spec.program.clone(),
            source: err,
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn is_available(&self, program: &str) -> bool {
        let found = which::which(program);
        debug!(program, found = ?found.as_ref().ok(), "PATH lookup");
        found.is_ok()
    }

    fn capture(&self, spec: &CommandSpec) -> Result<CommandOutput, RunnerError> {
        debug!(command = %spec, "Capturing");
        let output = build_command(spec)
            .output()
            .map_err(|e| spawn_error(spec, e))?;

        Ok(CommandOutput {
            status: CommandStatus {
                code: output.status.code(),
            },
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn stream(&self, spec: &CommandSpec) -> Result<CommandStatus, RunnerError> {
        debug!(command = %spec, "Streaming");
        let pb = spinner_for(spec, self.spinner);
        stream_child(spec, &pb, print_line)
    }
}
