//! Error types for build runs.
//!
//! One enum covers every way a run can abort. Each variant knows the process
//! exit code it maps to, so the CLI never has to inspect error text.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ports::{CommandStatus, RunnerError};
use crate::settings::SettingsError;

/// Exit code for failures detected by wxbuild itself rather than a child tool.
pub const INTERNAL_FAILURE_EXIT_CODE: i32 = 1;

/// Exit code used when a required program cannot be resolved, as a shell would.
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

/// Errors that abort a build run.
#[derive(Debug, Error)]
pub enum BuildError {
    // === Missing prerequisites ===
    /// The package manager is not installed.
    #[error(
        "Package manager `{program}` not found. Install it manually first (for Homebrew see https://brew.sh), then re-run wxbuild."
    )]
    MissingPackageManager { program: String },

    /// The toolkit query tool is still missing after dependency installation.
    #[error(
        "`{program}` not found after installing dependencies. The wxWidgets installation appears to be broken; reinstall it with your package manager."
    )]
    MissingToolkitConfig { program: String },

    // === Installation ===
    /// The package manager failed to install a package.
    #[error("Failed to install `{package}` ({status})")]
    InstallFailed {
        package: String,
        status: CommandStatus,
    },

    // === Toolkit ===
    /// A `wx-config` query returned non-zero.
    #[error("`{query}` failed ({status})")]
    ToolkitQueryFailed {
        query: String,
        status: CommandStatus,
    },

    // === Generation, configuration, compilation ===
    /// One of the build-file generation tools failed.
    #[error("`{tool}` failed ({status})")]
    GeneratorFailed { tool: String, status: CommandStatus },

    /// The generated configure script failed.
    #[error("configure failed ({status}); see config.log for details")]
    ConfigureFailed { status: CommandStatus },

    /// The build tool failed.
    #[error("Build failed ({status})")]
    CompileFailed { status: CommandStatus },

    // === Infrastructure ===
    /// A filesystem operation failed.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external program could not be run at all.
    #[error(transparent)]
    Runner(#[from] RunnerError),

    /// Settings could not be loaded or are invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl BuildError {
    /// Wrap an IO error with the path it happened at.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Exit code the process should terminate with.
    ///
    /// A failing child tool's code is propagated verbatim; internal checks
    /// use 1; a program that cannot be resolved uses 127.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InstallFailed { status, .. }
            | Self::ToolkitQueryFailed { status, .. }
            | Self::GeneratorFailed { status, .. }
            | Self::ConfigureFailed { status }
            | Self::CompileFailed { status } => status.exit_code(),
            Self::Runner(RunnerError::NotFound { .. }) => NOT_FOUND_EXIT_CODE,
            Self::MissingPackageManager { .. }
            | Self::MissingToolkitConfig { .. }
            | Self::Io { .. }
            | Self::Runner(RunnerError::Spawn { .. })
            | Self::Settings(_) => INTERNAL_FAILURE_EXIT_CODE,
        }
    }
}

/// Result type alias for build operations.
pub type BuildResult<T> = Result<T, BuildError>;
