//! Build orchestration.
//!
//! [`Orchestrator::run`] performs the nine [`BuildStep`]s strictly in order and
//! stops at the first failure. Each step is also exposed on its own so the CLI
//! can offer partial operations (`check-deps`, `clean`) without duplicating
//! the logic.

mod jobs;

pub use jobs::{DEFAULT_JOBS, parse_cpu_count};

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::artifacts::clean_generated_artifacts;
use crate::domain::{
    BuildStep, BuildSummary, Dependency, DependencyStatus, JobSource, ToolkitFlags,
    parse_listed_version,
};
use crate::error::{BuildError, BuildResult};
use crate::macros::write_compat_macros;
use crate::ports::{CommandOutput, CommandRunner, CommandSpec, StepReporter};
use crate::settings::{BuildSettings, validate_settings};

/// Compiler driver invoked for the final step.
pub const BUILD_TOOL: &str = "make";

/// Runs the build procedure against a project directory.
pub struct Orchestrator<'a> {
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn StepReporter,
    project_dir: PathBuf,
    settings: BuildSettings,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator after validating `settings`.
    pub fn new(
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn StepReporter,
        project_dir: impl Into<PathBuf>,
        settings: BuildSettings,
    ) -> BuildResult<Self> {
        validate_settings(&settings)?;
        Ok(Self {
            runner,
            reporter,
            project_dir: project_dir.into(),
            settings,
        })
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub const fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    /// Run every step in order.
    pub fn run(&self) -> BuildResult<BuildSummary> {
        info!(project = %self.project_dir.display(), "Starting build");

        self.step(BuildStep::CheckPackageManager, || {
            self.check_package_manager()
        })?;
        let (installed, already_present) = self.step(BuildStep::InstallDependencies, || {
            self.install_dependencies()
        })?;
        self.step(BuildStep::CheckToolkitConfig, || self.check_toolkit_config())?;
        let toolkit_version = self.step(BuildStep::ReportToolkitVersion, || {
            let version = self.toolkit_version()?;
            self.reporter
                .message(&format!("wxWidgets version: {version}"));
            Ok(version)
        })?;
        let macro_file = self.step(BuildStep::WriteMacros, || self.write_macros())?;
        let removed_artifacts = self.step(BuildStep::CleanArtifacts, || self.clean_artifacts())?;
        self.step(BuildStep::Regenerate, || self.regenerate())?;
        self.step(BuildStep::Configure, || self.configure())?;
        let (jobs, job_source) = self.step(BuildStep::Compile, || {
            let (jobs, source) = self.resolve_jobs();
            self.compile(jobs)?;
            Ok((jobs, source))
        })?;

        let output_dir = self.project_dir.join(self.settings.effective_output_dir());
        if output_dir.is_dir() {
            self.reporter
                .message(&format!("Executables are in {}", output_dir.display()));
        } else {
            warn!(dir = %output_dir.display(), "Build finished but output directory is missing");
        }

        info!("Build completed");
        Ok(BuildSummary {
            installed,
            already_present,
            toolkit_version,
            macro_file,
            removed_artifacts,
            jobs,
            job_source,
            output_dir,
        })
    }

    fn step<T>(&self, step: BuildStep, f: impl FnOnce() -> BuildResult<T>) -> BuildResult<T> {
        info!(step = step.number(), "{}", step.description());
        self.reporter.step_started(step);
        match f() {
            Ok(value) => {
                self.reporter.step_finished(step);
                Ok(value)
            }
            Err(e) => {
                self.reporter.step_failed(step, &e.to_string());
                Err(e)
            }
        }
    }

    // === Step 1 ===

    /// Fail unless the package manager resolves on `PATH`.
    pub fn check_package_manager(&self) -> BuildResult<()> {
        let program = self.settings.effective_package_manager();
        if self.runner.is_available(program) {
            debug!(program, "Package manager found");
            Ok(())
        } else {
            Err(BuildError::MissingPackageManager {
                program: program.to_string(),
            })
        }
    }

    // === Step 2 ===

    /// Ask the package manager whether `package` is installed.
    pub fn probe_dependency(&self, package: &str) -> BuildResult<Dependency> {
        let spec = CommandSpec::new(self.settings.effective_package_manager())
            .args(self.settings.effective_query_args())
            .arg(package);
        let output = self.runner.capture(&spec)?;

        let status = if output.status.success() {
            DependencyStatus::Present {
                version: output
                    .first_line()
                    .map(parse_listed_version)
                    .unwrap_or_default(),
            }
        } else {
            DependencyStatus::Missing
        };
        debug!(package, ?status, "Probed dependency");
        Ok(Dependency::missing(package).with_status(status))
    }

    /// Probe every configured package without installing anything.
    pub fn probe_dependencies(&self) -> BuildResult<Vec<Dependency>> {
        self.settings
            .effective_packages()
            .iter()
            .map(|package| self.probe_dependency(package))
            .collect()
    }

    /// Install each missing package. Returns `(installed, already_present)`.
    pub fn install_dependencies(&self) -> BuildResult<(Vec<String>, Vec<String>)> {
        let mut installed = Vec::new();
        let mut already_present = Vec::new();

        for package in self.settings.effective_packages() {
            let dep = self.probe_dependency(&package)?;
            if dep.is_present() {
                let version = dep.version().unwrap_or("installed");
                self.reporter
                    .message(&format!("✓ {package} ({version}) already installed"));
                already_present.push(package);
                continue;
            }

            self.reporter.message(&format!("Installing {package}..."));
            let spec = CommandSpec::new(self.settings.effective_package_manager())
                .args(self.settings.effective_install_args())
                .arg(&package);
            let status = self.runner.stream(&spec)?;
            if !status.success() {
                return Err(BuildError::InstallFailed { package, status });
            }
            info!(package = %package, "Installed dependency");
            installed.push(package);
        }

        Ok((installed, already_present))
    }

    // === Steps 3-4 ===

    /// Fail unless the toolkit query tool resolves on `PATH`.
    pub fn check_toolkit_config(&self) -> BuildResult<()> {
        let program = self.settings.effective_toolkit_config();
        if self.runner.is_available(program) {
            Ok(())
        } else {
            Err(BuildError::MissingToolkitConfig {
                program: program.to_string(),
            })
        }
    }

    /// Installed toolkit version. Informational only.
    pub fn toolkit_version(&self) -> BuildResult<String> {
        let output = self.query_toolkit("--version")?;
        Ok(output.first_line().unwrap_or_default().to_string())
    }

    /// Compiler and linker flags for the installed toolkit.
    pub fn toolkit_flags(&self) -> BuildResult<ToolkitFlags> {
        Ok(ToolkitFlags {
            cxxflags: self.query_toolkit("--cxxflags")?.joined_stdout(),
            libs: self.query_toolkit("--libs")?.joined_stdout(),
        })
    }

    fn query_toolkit(&self, flag: &str) -> BuildResult<CommandOutput> {
        let spec = CommandSpec::new(self.settings.effective_toolkit_config()).arg(flag);
        let output = self.runner.capture(&spec)?;
        if !output.status.success() {
            return Err(BuildError::ToolkitQueryFailed {
                query: spec.to_string(),
                status: output.status,
            });
        }
        Ok(output)
    }

    // === Steps 5-6 ===

    /// Write the compatibility macro file into the macro directory.
    pub fn write_macros(&self) -> BuildResult<PathBuf> {
        write_compat_macros(&self.macro_dir())
    }

    /// Remove stale configuration output.
    pub fn clean_artifacts(&self) -> BuildResult<Vec<PathBuf>> {
        let removed = clean_generated_artifacts(&self.project_dir)?;
        if removed.is_empty() {
            self.reporter.message("No stale artifacts found");
        }
        for path in &removed {
            self.reporter
                .message(&format!("Removed {}", path.display()));
        }
        Ok(removed)
    }

    fn macro_dir(&self) -> PathBuf {
        self.project_dir.join(self.settings.effective_macro_dir())
    }

    // === Step 7 ===

    /// The build-system generation chain, in execution order.
    pub fn generator_commands(&self) -> Vec<CommandSpec> {
        vec![
            CommandSpec::new("aclocal")
                .arg("-I")
                .arg(self.settings.effective_macro_dir()),
            CommandSpec::new("autoconf"),
            CommandSpec::new("autoheader"),
            CommandSpec::new("automake").arg("--add-missing"),
        ]
        .into_iter()
        .map(|spec| spec.current_dir(&self.project_dir))
        .collect()
    }

    /// Run the generation chain, stopping at the first failure.
    pub fn regenerate(&self) -> BuildResult<()> {
        for spec in self.generator_commands() {
            self.reporter.message(&format!("Running {spec}"));
            let status = self.runner.stream(&spec)?;
            if !status.success() {
                return Err(BuildError::GeneratorFailed {
                    tool: spec.display_name().to_string(),
                    status,
                });
            }
        }
        Ok(())
    }

    // === Step 8 ===

    /// Run the generated configure script with toolkit flags.
    pub fn configure(&self) -> BuildResult<()> {
        let flags = self.toolkit_flags()?;
        let script = self.project_dir.join("configure");
        let spec = CommandSpec::new(script.to_string_lossy())
            .args(flags.configure_args(self.settings.effective_extra_cxxflags()))
            .current_dir(&self.project_dir);

        let status = self.runner.stream(&spec)?;
        if status.success() {
            Ok(())
        } else {
            Err(BuildError::ConfigureFailed { status })
        }
    }

    // === Step 9 ===

    /// Parallelism for the build tool and where it came from.
    ///
    /// Detection is best effort: any failure of the CPU query falls back to
    /// [`DEFAULT_JOBS`].
    pub fn resolve_jobs(&self) -> (usize, JobSource) {
        if let Some(jobs) = self.settings.jobs {
            return (jobs, JobSource::Configured);
        }

        let query = self.settings.effective_cpu_query();
        let Some((program, args)) = query.split_first() else {
            return (DEFAULT_JOBS, JobSource::Fallback);
        };
        let spec = CommandSpec::new(program.as_str()).args(args.iter().cloned());

        match self.runner.capture(&spec) {
            Ok(output) if output.status.success() => {
                if let Some(count) = parse_cpu_count(&output.stdout) {
                    return (count, JobSource::Detected);
                }
                warn!(output = %output.stdout.trim(), "Unparseable CPU count, using {DEFAULT_JOBS} jobs");
            }
            Ok(output) => {
                warn!(status = %output.status, "CPU count query failed, using {DEFAULT_JOBS} jobs");
            }
            Err(e) => {
                warn!(error = %e, "CPU count query unavailable, using {DEFAULT_JOBS} jobs");
            }
        }
        (DEFAULT_JOBS, JobSource::Fallback)
    }

    /// Invoke the build tool with `jobs` parallel workers.
    pub fn compile(&self, jobs: usize) -> BuildResult<()> {
        self.reporter
            .message(&format!("Building with {jobs} parallel jobs..."));
        let spec = CommandSpec::new(BUILD_TOOL)
            .arg(format!("-j{jobs}"))
            .current_dir(&self.project_dir);

        let status = self.runner.stream(&spec)?;
        if status.success() {
            Ok(())
        } else {
            Err(BuildError::CompileFailed { status })
        }
    }
}
