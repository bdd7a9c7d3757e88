// TUI widget modules for each dashboard panel.

pub mod help_bar;
pub mod legend;
pub mod standings_chart;
pub mod status_bar;
pub mod summary_table;

use ratatui::style::Color;

/// Distinct series colors, assigned by legend position so a manager keeps the
/// same color when other series are toggled.
const SERIES_PALETTE: [Color; 18] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::Indexed(208),
    Color::Indexed(141),
    Color::Indexed(37),
    Color::Indexed(220),
    Color::Indexed(203),
    Color::Indexed(118),
];

/// Color of the series at legend position `index`.
pub fn series_color(index: usize) -> Color {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}
