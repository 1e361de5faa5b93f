/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Colour for a "days until next check-in" value:
/// overdue → red, due today → yellow, later → green.
pub fn color_for_due(days_until: i64) -> &'static str {
    if days_until < 0 {
        RED
    } else if days_until == 0 {
        YELLOW
    } else {
        GREEN
    }
}

/// Greys out placeholder values such as "--".
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
