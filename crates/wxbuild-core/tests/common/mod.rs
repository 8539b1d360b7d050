//! Shared test doubles for orchestrator integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;

use wxbuild_core::{
    BuildStep, CommandOutput, CommandRunner, CommandSpec, CommandStatus, RunnerError,
    StepReporter,
};

/// Recording fake that simulates Homebrew, wx-config, the autotools chain
/// and make against a real temporary project directory.
pub struct FakeRunner {
    project_dir: PathBuf,
    available: Mutex<HashSet<String>>,
    installed: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<CommandSpec>>,
    failures: HashMap<String, i32>,
    cpu_output: Option<String>,
    toolkit_ships_config: bool,
}

impl FakeRunner {
    /// A machine with the package manager present and nothing else.
    pub fn clean_machine(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            available: Mutex::new(HashSet::from(["brew".to_string()])),
            installed: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            failures: HashMap::new(),
            cpu_output: Some("8\n".to_string()),
            toolkit_ships_config: true,
        }
    }

    /// A machine without the package manager.
    pub fn without_package_manager(project_dir: impl Into<PathBuf>) -> Self {
        let runner = Self::clean_machine(project_dir);
        runner.available.lock().unwrap().clear();
        runner
    }

    /// Make `program` exit with `code` when streamed.
    pub fn failing(mut self, program: &str, code: i32) -> Self {
        self.failures.insert(program.to_string(), code);
        self
    }

    /// Replace the CPU query output; `None` makes the query unavailable.
    pub fn with_cpu_output(mut self, output: Option<&str>) -> Self {
        self.cpu_output = output.map(ToString::to_string);
        self
    }

    /// Installing wxwidgets no longer provides `wx-config`.
    pub fn with_broken_toolkit(mut self) -> Self {
        self.toolkit_ships_config = false;
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    /// Rendered command lines, e.g. `brew install autoconf`.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }

    /// Packages passed to `brew install`, in order.
    pub fn install_calls(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter(|c| c.program == "brew" && c.args.first().map(String::as_str) == Some("install"))
            .filter_map(|c| c.args.last().cloned())
            .collect()
    }

    fn record(&self, spec: &CommandSpec) {
        self.calls.lock().unwrap().push(spec.clone());
    }

    fn failure_for(&self, spec: &CommandSpec) -> Option<CommandStatus> {
        self.failures
            .get(spec.display_name())
            .map(|&code| CommandStatus::from_code(code))
    }
}

impl CommandRunner for FakeRunner {
    fn is_available(&self, program: &str) -> bool {
        self.available.lock().unwrap().contains(program)
    }

    fn capture(&self, spec: &CommandSpec) -> Result<CommandOutput, RunnerError> {
        self.record(spec);
        match spec.program.as_str() {
            "brew" => {
                let package = spec.args.last().cloned().unwrap_or_default();
                let installed = self.installed.lock().unwrap();
                Ok(match installed.get(&package) {
                    Some(version) => CommandOutput::ok(format!("{package} {version}\n")),
                    None => CommandOutput::failed(1, format!("Error: No such keg: {package}")),
                })
            }
            "wx-config" => {
                if let Some(status) = self.failure_for(spec) {
                    return Ok(CommandOutput {
                        status,
                        stdout: String::new(),
                        stderr: "wx-config: no matching configuration".to_string(),
                    });
                }
                let flag = spec.args.first().map(String::as_str).unwrap_or_default();
                Ok(match flag {
                    "--version" => CommandOutput::ok("3.2.4\n"),
                    "--cxxflags" => {
                        CommandOutput::ok("-I/opt/wx/include\n-D__WXOSX_COCOA__\n")
                    }
                    "--libs" => CommandOutput::ok("-L/opt/wx/lib -lwx_osx_cocoau_core-3.2\n"),
                    _ => CommandOutput::failed(1, "unknown flag"),
                })
            }
            "sysctl" | "nproc" => match &self.cpu_output {
                Some(out) => Ok(CommandOutput::ok(out.clone())),
                None => Err(RunnerError::NotFound {
                    program: spec.program.clone(),
                }),
            },
            other => Err(RunnerError::NotFound {
                program: other.to_string(),
            }),
        }
    }

    fn stream(&self, spec: &CommandSpec) -> Result<CommandStatus, RunnerError> {
        self.record(spec);
        if let Some(status) = self.failure_for(spec) {
            return Ok(status);
        }

        let dir = spec.cwd.clone().unwrap_or_else(|| self.project_dir.clone());
        match spec.display_name() {
            "brew" => {
                let package = spec.args.last().cloned().unwrap_or_default();
                if package == "wxwidgets" && self.toolkit_ships_config {
                    self.available.lock().unwrap().insert("wx-config".to_string());
                }
                self.installed
                    .lock()
                    .unwrap()
                    .insert(package, "1.0".to_string());
            }
            "autoconf" => {
                std::fs::write(dir.join("configure"), "#!/bin/sh\nexit 0\n").unwrap();
                std::fs::create_dir_all(dir.join("autom4te.cache")).unwrap();
            }
            "configure" => {
                std::fs::write(dir.join("config.status"), "").unwrap();
                std::fs::write(dir.join("config.log"), "").unwrap();
            }
            "make" => {
                std::fs::create_dir_all(dir.join("src")).unwrap();
                std::fs::write(dir.join("src/wxplayer"), "binary").unwrap();
            }
            _ => {}
        }
        Ok(CommandStatus::SUCCESS)
    }
}

/// Reporter that records every event as a string.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn started_steps(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| e.strip_prefix("start ").map(ToString::to_string))
            .collect()
    }
}

impl StepReporter for RecordingReporter {
    fn step_started(&self, step: BuildStep) {
        self.events.lock().unwrap().push(format!("start {step:?}"));
    }

    fn message(&self, msg: &str) {
        self.events.lock().unwrap().push(format!("msg {msg}"));
    }

    fn step_finished(&self, step: BuildStep) {
        self.events.lock().unwrap().push(format!("done {step:?}"));
    }

    fn step_failed(&self, step: BuildStep, msg: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("fail {step:?}: {msg}"));
    }
}
