//! Build dependency types.

/// Packages that must be installed before the build system can be regenerated,
/// in installation order.
pub const REQUIRED_PACKAGES: [&str; 5] =
    ["autoconf", "automake", "libtool", "pkg-config", "wxwidgets"];

/// Installation state of a package as reported by the package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// Package is installed. `version` may be empty if the manager didn't report one.
    Present { version: String },
    /// Package is not installed.
    Missing,
}

/// A named build dependency and its current status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub status: DependencyStatus,
}

impl Dependency {
    /// A dependency that has not been probed yet.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: DependencyStatus::Missing,
        }
    }

    /// Set the status of this dependency.
    #[must_use]
    pub fn with_status(mut self, status: DependencyStatus) -> Self {
        self.status = status;
        self
    }

    pub const fn is_present(&self) -> bool {
        matches!(self.status, DependencyStatus::Present { .. })
    }

    /// Version string if present and non-empty.
    pub fn version(&self) -> Option<&str> {
        match &self.status {
            DependencyStatus::Present { version } if !version.is_empty() => Some(version),
            _ => None,
        }
    }
}

/// Extract a version from a package manager listing line.
///
/// `brew list --versions wxwidgets` prints `wxwidgets 3.2.4 3.2.2`; the first
/// version after the package name wins. A line without a version yields an
/// empty string.
pub fn parse_listed_version(line: &str) -> String {
    line.split_whitespace()
        .nth(1)
        .map(ToString::to_string)
        .unwrap_or_default()
}
