//! Subcommands.

use clap::Subcommand;

/// Available commands. Running `wxbuild` with no subcommand is the same as
/// `wxbuild build`.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Install dependencies, regenerate the build system, configure and compile
    Build,

    /// Check the package manager and required packages without installing anything
    CheckDeps,

    /// Remove stale configuration output (configure, config.log, config.status, autom4te.cache)
    Clean,
}
