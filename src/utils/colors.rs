/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Amount color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_amount(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Goal progress color: green when reached, yellow past 60%, red below.
pub fn color_for_progress(progress: f64) -> &'static str {
    if progress >= 100.0 {
        GREEN
    } else if progress >= 60.0 {
        YELLOW
    } else {
        RED
    }
}

/// Grey for placeholder values ("--"), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
