//! Terminal styling shared by handlers.

// ANSI color codes
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

/// Width of the horizontal rules around tables.
pub const RULE_WIDTH: usize = 60;

/// Horizontal rule made of `ch`.
pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}
