//! Command runner port.
//!
//! Every external tool the orchestrator touches (package manager, toolkit
//! query tool, autotools chain, configure script, make) goes through this
//! trait. Implementations live in adapters (e.g., wxbuild-runtime); tests
//! substitute a recording fake.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised before a command produces an exit status.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The program could not be resolved on `PATH`.
    #[error("`{program}` not found on PATH")]
    NotFound { program: String },

    /// The program was found but could not be started.
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// A single external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name (resolved via `PATH`) or path to an executable.
    pub program: String,
    /// Arguments, passed verbatim.
    pub args: Vec<String>,
    /// Working directory; inherits the caller's when `None`.
    pub cwd: Option<PathBuf>,
    /// Extra environment variables.
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    /// Create a spec with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory.
    #[must_use]
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Add an environment variable.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Program name without any leading directories, for diagnostics.
    pub fn display_name(&self) -> &str {
        Path::new(&self.program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.program)
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Exit status of a finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    /// A successful status.
    pub const SUCCESS: Self = Self { code: Some(0) };

    /// Status with an explicit exit code.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Status of a process killed by a signal.
    #[must_use]
    pub const fn terminated() -> Self {
        Self { code: None }
    }

    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    /// Exit code to propagate; signal termination maps to 1.
    pub const fn exit_code(&self) -> i32 {
        match self.code {
            Some(code) => code,
            None => 1,
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Captured result of a query command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: CommandStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::SUCCESS,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::from_code(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// First non-empty line of stdout, falling back to stderr
    /// (some tools print versions to stderr).
    pub fn first_line(&self) -> Option<&str> {
        let text = if self.stdout.trim().is_empty() {
            &self.stderr
        } else {
            &self.stdout
        };
        text.lines().map(str::trim).find(|l| !l.is_empty())
    }

    /// Whole stdout with surrounding whitespace and newlines collapsed to spaces.
    pub fn joined_stdout(&self) -> String {
        self.stdout.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Port for running external commands.
pub trait CommandRunner: Send + Sync {
    /// Whether `program` resolves to an executable on `PATH`.
    fn is_available(&self, program: &str) -> bool;

    /// Run a command and collect its output without echoing it.
    fn capture(&self, spec: &CommandSpec) -> Result<CommandOutput, RunnerError>;

    /// Run a command with its output forwarded to the console and wait for it.
    fn stream(&self, spec: &CommandSpec) -> Result<CommandStatus, RunnerError>;
}
