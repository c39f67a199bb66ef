//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Kilograms with exactly two decimals: 350 → "350.00".
pub fn format_kg(value: f64) -> String {
    format!("{:.2}", value)
}

/// A stored usage figure with its unit, or "--" when it was not provided.
pub fn format_figure(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.2} {}", v, unit),
        None => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kg_always_has_two_decimals() {
        assert_eq!(format_kg(350.0), "350.00");
        assert_eq!(format_kg(0.0), "0.00");
        assert_eq!(format_kg(0.005), "0.01");
        assert_eq!(format_kg(12.345678), "12.35");
    }

    #[test]
    fn figures_show_placeholder_when_absent() {
        assert_eq!(format_figure(None, "kWh"), "--");
        assert_eq!(format_figure(Some(2.5), "km"), "2.50 km");
    }
}
