//! Build settings and validation.
//!
//! Every field is optional so a project can override just what it needs in
//! `wxbuild.json`; the `effective_*` accessors fill in the defaults that
//! reproduce the stock Homebrew/wxWidgets build.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::REQUIRED_PACKAGES;

/// Name of the optional per-project settings file.
pub const SETTINGS_FILE_NAME: &str = "wxbuild.json";

pub const DEFAULT_PACKAGE_MANAGER: &str = "brew";
pub const DEFAULT_TOOLKIT_CONFIG: &str = "wx-config";
pub const DEFAULT_MACRO_DIR: &str = "m4";
pub const DEFAULT_OUTPUT_DIR: &str = "src";
/// Debug and optimization flags appended to the toolkit's compiler flags.
pub const DEFAULT_EXTRA_CXXFLAGS: &str = "-g -O2";

/// Errors from loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Per-project build settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuildSettings {
    /// Package manager executable.
    pub package_manager: Option<String>,

    /// Arguments that make the package manager report whether a package is
    /// installed (the package name is appended).
    pub query_args: Option<Vec<String>>,

    /// Arguments that make the package manager install a package.
    pub install_args: Option<Vec<String>>,

    /// Packages to ensure, in order.
    pub packages: Option<Vec<String>>,

    /// Toolkit configuration-query executable.
    pub toolkit_config: Option<String>,

    /// Directory (relative to the project) holding the compatibility macros.
    pub macro_dir: Option<String>,

    /// Flags appended to the toolkit's compiler flags.
    pub extra_cxxflags: Option<String>,

    /// Directory (relative to the project) the build tool writes executables to.
    pub output_dir: Option<String>,

    /// Fixed parallelism; detected from the CPU count when unset.
    pub jobs: Option<usize>,

    /// Command that prints the number of CPUs.
    pub cpu_query: Option<Vec<String>>,
}

impl BuildSettings {
    /// Load settings from `project_dir/wxbuild.json`, or defaults if absent.
    pub fn load(project_dir: &Path) -> Result<Self, SettingsError> {
        let path = project_dir.join(SETTINGS_FILE_NAME);
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(SettingsError::Read { path, source }),
        };
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse { path, source })
    }

    /// Overlay every field set in `other` on top of `self`.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(
            package_manager,
            query_args,
            install_args,
            packages,
            toolkit_config,
            macro_dir,
            extra_cxxflags,
            output_dir,
            jobs,
            cpu_query
        );
        self
    }

    pub fn effective_package_manager(&self) -> &str {
        self.package_manager
            .as_deref()
            .unwrap_or(DEFAULT_PACKAGE_MANAGER)
    }

    pub fn effective_query_args(&self) -> Vec<String> {
        self.query_args
            .clone()
            .unwrap_or_else(|| vec!["list".to_string(), "--versions".to_string()])
    }

    pub fn effective_install_args(&self) -> Vec<String> {
        self.install_args
            .clone()
            .unwrap_or_else(|| vec!["install".to_string()])
    }

    pub fn effective_packages(&self) -> Vec<String> {
        self.packages.clone().unwrap_or_else(|| {
            REQUIRED_PACKAGES
                .iter()
                .map(ToString::to_string)
                .collect()
        })
    }

    pub fn effective_toolkit_config(&self) -> &str {
        self.toolkit_config
            .as_deref()
            .unwrap_or(DEFAULT_TOOLKIT_CONFIG)
    }

    pub fn effective_macro_dir(&self) -> &str {
        self.macro_dir.as_deref().unwrap_or(DEFAULT_MACRO_DIR)
    }

    pub fn effective_extra_cxxflags(&self) -> &str {
        self.extra_cxxflags
            .as_deref()
            .unwrap_or(DEFAULT_EXTRA_CXXFLAGS)
    }

    pub fn effective_output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    pub fn effective_cpu_query(&self) -> Vec<String> {
        self.cpu_query.clone().unwrap_or_else(default_cpu_query)
    }
}

fn default_cpu_query() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["sysctl".to_string(), "-n".to_string(), "hw.ncpu".to_string()]
    } else {
        vec!["nproc".to_string()]
    }
}

/// Reject settings the orchestrator can't act on.
pub fn validate_settings(settings: &BuildSettings) -> Result<(), SettingsError> {
    non_empty("package_manager", settings.package_manager.as_deref())?;
    non_empty("toolkit_config", settings.toolkit_config.as_deref())?;

    if let Some(packages) = &settings.packages {
        if packages.is_empty() {
            return Err(invalid("packages", "at least one package is required"));
        }
        if packages.iter().any(|p| p.trim().is_empty()) {
            return Err(invalid("packages", "package names must not be empty"));
        }
    }

    if settings.install_args.as_ref().is_some_and(Vec::is_empty) {
        return Err(invalid("install_args", "must not be empty"));
    }

    if settings.cpu_query.as_ref().is_some_and(Vec::is_empty) {
        return Err(invalid("cpu_query", "must name a command"));
    }

    if settings.jobs == Some(0) {
        return Err(invalid("jobs", "must be at least 1"));
    }

    relative_dir("macro_dir", settings.macro_dir.as_deref())?;
    relative_dir("output_dir", settings.output_dir.as_deref())?;

    Ok(())
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn non_empty(field: &'static str, value: Option<&str>) -> Result<(), SettingsError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(invalid(field, "must not be empty")),
        _ => Ok(()),
    }
}

fn relative_dir(field: &'static str, value: Option<&str>) -> Result<(), SettingsError> {
    let Some(value) = value else {
        return Ok(());
    };
    if value.trim().is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    let path = Path::new(value);
    if path.is_absolute() {
        return Err(invalid(field, "must be relative to the project directory"));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(invalid(field, "must stay inside the project directory"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = BuildSettings::default();
        assert_eq!(settings.effective_package_manager(), "brew");
        assert_eq!(settings.effective_toolkit_config(), "wx-config");
        assert_eq!(settings.effective_macro_dir(), "m4");
        assert_eq!(settings.effective_output_dir(), "src");
        assert_eq!(settings.effective_extra_cxxflags(), "-g -O2");
        assert_eq!(settings.effective_packages(), REQUIRED_PACKAGES.to_vec());
        assert_eq!(settings.effective_query_args(), vec!["list", "--versions"]);
        assert_eq!(settings.effective_install_args(), vec!["install"]);
        assert!(!settings.effective_cpu_query().is_empty());
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = BuildSettings::load(dir.path()).unwrap();
        assert_eq!(settings, BuildSettings::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE_NAME),
            r#"{ "jobs": 6, "output_dir": "bin" }"#,
        )
        .unwrap();

        let settings = BuildSettings::load(dir.path()).unwrap();
        assert_eq!(settings.jobs, Some(6));
        assert_eq!(settings.effective_output_dir(), "bin");
        assert_eq!(settings.effective_package_manager(), "brew");
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE_NAME), "{ jobs: ").unwrap();

        let err = BuildSettings::load(dir.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_merge_prefers_set_fields() {
        let base = BuildSettings {
            jobs: Some(2),
            output_dir: Some("bin".to_string()),
            ..Default::default()
        };
        let overrides = BuildSettings {
            jobs: Some(8),
            ..Default::default()
        };

        let merged = base.merge(overrides);
        assert_eq!(merged.jobs, Some(8));
        assert_eq!(merged.output_dir.as_deref(), Some("bin"));
    }

    #[test]
    fn test_validate_rejects_zero_jobs() {
        let settings = BuildSettings {
            jobs: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::Invalid { field: "jobs", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_package_list() {
        let settings = BuildSettings {
            packages: Some(vec![]),
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_validate_rejects_escaping_dirs() {
        let settings = BuildSettings {
            output_dir: Some("../elsewhere".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::Invalid {
                field: "output_dir",
                ..
            })
        ));

        let settings = BuildSettings {
            macro_dir: Some("/usr/share/aclocal".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::Invalid {
                field: "macro_dir",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_programs() {
        let settings = BuildSettings {
            package_manager: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_err());
    }
}
