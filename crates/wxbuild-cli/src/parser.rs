//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;
use wxbuild_core::BuildSettings;

use crate::commands::Commands;

/// Build orchestrator for the wxWidgets media player.
#[derive(Parser, Debug)]
#[command(name = "wxbuild")]
#[command(about = "Install dependencies, configure and build the wxWidgets media player")]
#[command(version)]
pub struct Cli {
    /// Project directory containing configure.ac (defaults to the current directory)
    #[arg(long = "project-dir", short = 'C', global = true)]
    pub project_dir: Option<PathBuf>,

    /// Number of parallel build jobs (skips CPU detection)
    #[arg(short = 'j', long = "jobs", env = "WXBUILD_JOBS", global = true)]
    pub jobs: Option<usize>,

    /// Package manager used to probe and install dependencies
    #[arg(long = "package-manager", env = "WXBUILD_PACKAGE_MANAGER", global = true)]
    pub package_manager: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Command to run; the full build when none was given.
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Build)
    }

    /// Settings supplied on the command line, to be merged over the file.
    pub fn settings_overrides(&self) -> BuildSettings {
        BuildSettings {
            jobs: self.jobs,
            package_manager: self.package_manager.clone(),
            ..Default::default()
        }
    }
}
