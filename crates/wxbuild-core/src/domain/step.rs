//! The fixed, ordered steps of a build run.

use std::fmt;

/// One step of the build procedure, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStep {
    CheckPackageManager,
    InstallDependencies,
    CheckToolkitConfig,
    ReportToolkitVersion,
    WriteMacros,
    CleanArtifacts,
    Regenerate,
    Configure,
    Compile,
}

impl BuildStep {
    /// All steps in execution order.
    pub const ALL: [Self; 9] = [
        Self::CheckPackageManager,
        Self::InstallDependencies,
        Self::CheckToolkitConfig,
        Self::ReportToolkitVersion,
        Self::WriteMacros,
        Self::CleanArtifacts,
        Self::Regenerate,
        Self::Configure,
        Self::Compile,
    ];

    pub const TOTAL: usize = Self::ALL.len();

    /// 1-based position in the run.
    pub const fn number(self) -> usize {
        match self {
            Self::CheckPackageManager => 1,
            Self::InstallDependencies => 2,
            Self::CheckToolkitConfig => 3,
            Self::ReportToolkitVersion => 4,
            Self::WriteMacros => 5,
            Self::CleanArtifacts => 6,
            Self::Regenerate => 7,
            Self::Configure => 8,
            Self::Compile => 9,
        }
    }

    /// Short human-readable description for progress output.
    pub const fn description(self) -> &'static str {
        match self {
            Self::CheckPackageManager => "Checking for package manager",
            Self::InstallDependencies => "Installing build dependencies",
            Self::CheckToolkitConfig => "Checking for wxWidgets configuration tool",
            Self::ReportToolkitVersion => "Querying wxWidgets version",
            Self::WriteMacros => "Writing compatibility macros",
            Self::CleanArtifacts => "Removing stale configuration artifacts",
            Self::Regenerate => "Regenerating build system",
            Self::Configure => "Running configure",
            Self::Compile => "Compiling",
        }
    }
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}/{}] {}",
            self.number(),
            Self::TOTAL,
            self.description()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_follow_declaration_order() {
        for (idx, step) in BuildStep::ALL.iter().enumerate() {
            assert_eq!(step.number(), idx + 1);
        }
    }

    #[test]
    fn test_display_includes_position() {
        assert_eq!(
            BuildStep::Compile.to_string(),
            "[9/9] Compiling".to_string()
        );
    }
}
