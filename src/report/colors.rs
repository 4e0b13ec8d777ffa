//! Centralized color scheme for terminal output

use colored::{ColoredString, Colorize};

/// Structural element colors
pub struct StructureColors;

impl StructureColors {
    /// File path
    pub fn file_path(text: &str) -> ColoredString {
        text.cyan().bold()
    }

    /// Root label
    pub fn label(text: &str) -> ColoredString {
        text.magenta()
    }

    /// Qualified class name
    pub fn symbol_name(text: &str) -> ColoredString {
        text.white().bold()
    }

    /// Count/statistics numbers
    pub fn count(text: &str) -> ColoredString {
        text.white().bold()
    }

    /// Secondary information
    pub fn dimmed(text: &str) -> ColoredString {
        text.dimmed()
    }
}

/// Box drawing characters for section separators
pub struct BoxChars;

impl BoxChars {
    pub fn heavy_line(width: usize) -> String {
        "━".repeat(width)
    }

    pub fn light_line(width: usize) -> String {
        "─".repeat(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_have_requested_width() {
        assert_eq!(BoxChars::heavy_line(3).chars().count(), 3);
        assert_eq!(BoxChars::light_line(0), "");
    }
}
