//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::logging::LogLevel;
use ratatui::prelude::Color;
use std::str::FromStr;

/// Frames of the loading spinner
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Get a ratatui color for a category from its `#RRGGBB` string
pub fn parse_category_color(color: &str) -> Color {
    Color::from_str(color.trim()).unwrap_or(Color::Gray)
}

/// Get a ratatui color for an activity entry based on its level
pub fn get_level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Trace | LogLevel::Debug => Color::DarkGray,
        LogLevel::Info => Color::Cyan,
        LogLevel::Warn => Color::Yellow,
        LogLevel::Error => Color::Red,
    }
}

/// Spinner frame for the given animation tick
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Format compact time (HH:MM:SS) from a full "YYYY-MM-DD HH:MM:SS" timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    timestamp
        .split(' ')
        .nth(1)
        .unwrap_or(timestamp)
        .to_string()
}

/// Number of card columns that fit in `width`
pub fn card_columns(width: u16, min_card_width: u16, max_columns: usize) -> usize {
    let fitting = (width / min_card_width.max(1)) as usize;
    fitting.clamp(1, max_columns.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_color() {
        assert_eq!(parse_category_color("#22c55e"), Color::Rgb(0x22, 0xc5, 0x5e));
        assert_eq!(parse_category_color("not a color"), Color::Gray);
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER_FRAMES.len()));
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2026-10-18 09:15:02"), "09:15:02");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_card_columns() {
        assert_eq!(card_columns(120, 26, 4), 4);
        assert_eq!(card_columns(60, 26, 4), 2);
        assert_eq!(card_columns(10, 26, 4), 1);
    }
}
