//! Display utilities for dependency status output.

use wxbuild_core::{Dependency, DependencyStatus};

use crate::presentation::{BOLD, GREEN, RED, RESET, YELLOW, rule};

const NAME_WIDTH: usize = 20;
const STATUS_WIDTH: usize = 15;

/// Pad `text` to the status column before colouring it, so escape codes
/// don't count toward the width.
fn status_cell(colour: &str, text: &str) -> String {
    format!("{colour}{text:<STATUS_WIDTH$}{RESET}")
}

/// Print the table header.
pub fn print_header() {
    println!(
        "{BOLD}{:<NAME_WIDTH$} {:<STATUS_WIDTH$} KIND{RESET}",
        "DEPENDENCY", "STATUS"
    );
    println!("{}", rule('='));
}

/// Print a single package row in the status table.
pub fn print_dependency(dep: &Dependency) {
    let status = match &dep.status {
        DependencyStatus::Present { version } if version.is_empty() => {
            status_cell(GREEN, "✓ installed")
        }
        DependencyStatus::Present { version } => status_cell(GREEN, &format!("✓ {version}")),
        DependencyStatus::Missing => status_cell(RED, "✗ missing"),
    };

    println!("{:<NAME_WIDTH$} {status} package", dep.name);
}

/// Print a row for a program that must resolve on `PATH`.
pub fn print_tool(program: &str, found: bool) {
    let status = if found {
        status_cell(GREEN, "✓ found")
    } else {
        status_cell(YELLOW, "○ not on PATH")
    };

    println!("{program:<NAME_WIDTH$} {status} tool");
}
