//! CLI entry point - the composition root.
//!
//! Wires the system command runner into the handlers and maps failures to
//! the process exit code.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wxbuild_cli::error::exit_code_for;
use wxbuild_cli::presentation::{RED, RESET};
use wxbuild_cli::{Cli, Commands, bootstrap, handlers};
use wxbuild_runtime::SystemCommandRunner;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = bootstrap(cli)?;
    let runner = SystemCommandRunner::new().with_spinner(std::io::stderr().is_terminal());

    match cli.selected_command() {
        Commands::Build => {
            handlers::build::execute(&ctx, &runner)?;
        }
        Commands::CheckDeps => {
            handlers::check_deps::execute(&ctx, &runner)?;
        }
        Commands::Clean => {
            handlers::clean::execute(&ctx, &runner)?;
        }
    }
    Ok(())
}

fn main() {
    // Load .env before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("{RED}Error:{RESET} {err:#}");
        std::process::exit(exit_code_for(&err));
    }
}
