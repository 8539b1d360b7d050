//! CLI-specific error types and exit-code mapping.

use wxbuild_core::BuildError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The build procedure failed.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Argument error (bad project directory, etc.).
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// `check-deps` found packages that are not installed.
    #[error("Missing dependencies: {}. Run `wxbuild` to install them.", .0.join(", "))]
    MissingDependencies(Vec<String>),
}

impl CliError {
    /// Map error to the process exit code.
    ///
    /// Build failures keep the code of the tool that failed; see
    /// [`BuildError::exit_code`].
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Build(err) => err.exit_code(),
            Self::Arguments(_) => 2, // EX_USAGE
            Self::MissingDependencies(_) => 1,
        }
    }
}

/// Exit code for an error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map_or(1, CliError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxbuild_core::CommandStatus;

    #[test]
    fn test_build_error_keeps_tool_exit_code() {
        let err = CliError::from(BuildError::ConfigureFailed {
            status: CommandStatus::from_code(77),
        });
        assert_eq!(err.exit_code(), 77);
    }

    #[test]
    fn test_exit_code_through_anyhow() {
        let err: anyhow::Error = CliError::MissingDependencies(vec!["libtool".into()]).into();
        assert_eq!(exit_code_for(&err), 1);

        let err: anyhow::Error = CliError::Arguments("no such directory".into()).into();
        assert_eq!(exit_code_for(&err), 2);

        let err = anyhow::anyhow!("unexpected");
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn test_missing_dependencies_message() {
        let err = CliError::MissingDependencies(vec!["libtool".into(), "wxwidgets".into()]);
        assert!(err.to_string().contains("libtool, wxwidgets"));
    }
}
