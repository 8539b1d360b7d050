//! Outcome of a successful build run.

use std::fmt;
use std::path::PathBuf;

/// Where the compile step's parallelism came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSource {
    /// Set explicitly via settings, flag or environment.
    Configured,
    /// Reported by the CPU query utility.
    Detected,
    /// Detection failed; the fixed default was used.
    Fallback,
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Configured => "configured",
            Self::Detected => "detected",
            Self::Fallback => "fallback",
        };
        f.write_str(s)
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Packages installed during this run.
    pub installed: Vec<String>,
    /// Packages that were already installed.
    pub already_present: Vec<String>,
    /// Toolkit version as reported by the query tool.
    pub toolkit_version: String,
    /// Path of the written macro file.
    pub macro_file: PathBuf,
    /// Stale artifacts that were removed.
    pub removed_artifacts: Vec<PathBuf>,
    /// Parallelism passed to the build tool.
    pub jobs: usize,
    pub job_source: JobSource,
    /// Directory the build tool places executables in.
    pub output_dir: PathBuf,
}
