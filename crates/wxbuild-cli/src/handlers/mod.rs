//! Command handlers.
//!
//! Handlers are thin wrappers: build an [`Orchestrator`](wxbuild_core::Orchestrator)
//! from the [`CliContext`](crate::CliContext), call it, and format the
//! outcome for the terminal. They take the runner as a port so tests can
//! substitute a stub.

pub mod build;
pub mod check_deps;
pub mod clean;

#[cfg(test)]
pub(crate) mod stub {
    use std::collections::HashMap;
    use std::path::Path;

    use wxbuild_core::{
        BuildSettings, CommandOutput, CommandRunner, CommandSpec, CommandStatus, RunnerError,
    };

    use crate::CliContext;

    /// Runner with a fixed view of the machine: which programs exist and
    /// which packages are installed. Streamed commands always succeed.
    #[derive(Default)]
    pub struct StubRunner {
        pub available: Vec<&'static str>,
        pub installed: HashMap<&'static str, &'static str>,
    }

    impl CommandRunner for StubRunner {
        fn is_available(&self, program: &str) -> bool {
            self.available.contains(&program)
        }

        fn capture(&self, spec: &CommandSpec) -> Result<CommandOutput, RunnerError> {
            let package = spec.args.last().map(String::as_str).unwrap_or_default();
            Ok(match self.installed.get(package) {
                Some(version) => CommandOutput::ok(format!("{package} {version}\n")),
                None => CommandOutput::failed(1, "not installed"),
            })
        }

        fn stream(&self, _spec: &CommandSpec) -> Result<CommandStatus, RunnerError> {
            Ok(CommandStatus::SUCCESS)
        }
    }

    pub fn context(dir: &Path) -> CliContext {
        CliContext {
            project_dir: dir.to_path_buf(),
            settings: BuildSettings::default(),
        }
    }
}
