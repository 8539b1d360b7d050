//! Composition of the project directory and effective settings.

use std::path::{Path, PathBuf};

use tracing::debug;
use wxbuild_core::{BuildError, BuildSettings, SETTINGS_FILE_NAME};

use crate::error::CliError;
use crate::parser::Cli;

/// Everything a handler needs besides the runner.
#[derive(Debug, Clone)]
pub struct CliContext {
    pub project_dir: PathBuf,
    pub settings: BuildSettings,
}

/// Resolve the project directory and merge `wxbuild.json` with CLI overrides.
pub fn bootstrap(cli: &Cli) -> Result<CliContext, CliError> {
    let requested = cli.project_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let project_dir = resolve_project_dir(&requested)?;

    let settings = BuildSettings::load(&project_dir)
        .map_err(BuildError::from)?
        .merge(cli.settings_overrides());
    debug!(
        project = %project_dir.display(),
        file = SETTINGS_FILE_NAME,
        ?settings,
        "Resolved settings"
    );

    Ok(CliContext {
        project_dir,
        settings,
    })
}

fn resolve_project_dir(dir: &Path) -> Result<PathBuf, CliError> {
    let resolved = dir.canonicalize().map_err(|e| {
        CliError::Arguments(format!("project directory {}: {e}", dir.display()))
    })?;
    if !resolved.is_dir() {
        return Err(CliError::Arguments(format!(
            "{} is not a directory",
            resolved.display()
        )));
    }
    Ok(resolved)
}
