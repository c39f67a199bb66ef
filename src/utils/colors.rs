/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Returns GREY when the figure was not provided, RESET otherwise.
pub fn color_for_optional_figure(value: Option<f64>) -> &'static str {
    match value {
        Some(_) => RESET,
        None => GREY,
    }
}

/// A zero footprint is greyed out, anything else is highlighted.
pub fn color_for_total(total_kg: f64) -> &'static str {
    if total_kg > 0.0 { YELLOW } else { GREY }
}
