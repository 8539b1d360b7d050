//! Core domain types, ports and the build orchestrator for wxbuild.
//!
//! This crate owns everything about *what* a build run does: the ordered
//! steps, the dependency list, the compatibility macro file, the stale
//! artifact set and the error taxonomy. It never spawns a process itself;
//! all external tools are reached through the [`ports::CommandRunner`] port,
//! which `wxbuild-runtime` implements for the real system.

#![deny(unused_crate_dependencies)]

pub mod artifacts;
pub mod domain;
pub mod error;
pub mod macros;
pub mod orchestrator;
pub mod ports;
pub mod settings;

pub use artifacts::{STALE_ARTIFACTS, clean_generated_artifacts};
pub use domain::{
    BuildStep, BuildSummary, Dependency, DependencyStatus, JobSource, REQUIRED_PACKAGES,
    ToolkitFlags,
};
pub use error::{BuildError, BuildResult};
pub use macros::{MACRO_FILE_NAME, WXWIN_M4, write_compat_macros};
pub use orchestrator::{DEFAULT_JOBS, Orchestrator};
pub use ports::{
    CommandOutput, CommandRunner, CommandSpec, CommandStatus, NoopReporter, RunnerError,
    StepReporter,
};
pub use settings::{BuildSettings, SETTINGS_FILE_NAME, SettingsError, validate_settings};
