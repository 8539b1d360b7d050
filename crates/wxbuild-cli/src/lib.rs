//! `wxbuild` command-line adapter.
//!
//! Parses arguments, resolves the project directory and settings, and hands
//! the work to [`wxbuild_core::Orchestrator`] through thin handlers.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary target only
use dotenvy as _;
use tracing_subscriber as _;
use wxbuild_runtime as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod reporter;

pub use bootstrap::{CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
pub use reporter::TerminalReporter;
