// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +---------------------------------+----------------+
// | Chart (75%)                     | Legend (25%)   |
// |   (Summary tab: full width table)                |
// +---------------------------------+----------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: title, tab indicator, status message.
    pub status_bar: Rect,
    /// Everything between the status and help bars. The summary tab uses all
    /// of it.
    pub main_panel: Rect,
    /// Left part of the main panel on the chart tab.
    pub chart: Rect,
    /// Right part of the main panel on the chart tab.
    pub legend: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(8),    // main panel
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let main_panel = vertical[1];
    let help_bar = vertical[2];

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(main_panel);

    AppLayout {
        status_bar,
        main_panel,
        chart: horizontal[0],
        legend: horizontal[1],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
