//! OS adapters for wxbuild.
//!
//! Implements the [`wxbuild_core::CommandRunner`] port on top of
//! `std::process`, resolving programs through `PATH` and forwarding the
//! output of long-running tools to the terminal.

#![deny(unsafe_code)]

mod runner;
mod stream;

pub use runner::SystemCommandRunner;
