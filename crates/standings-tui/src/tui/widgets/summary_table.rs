// Summary widget: the per-manager table, in the order the aggregator sorted it.
//
// Columns: Manager | seasons_played | top4_finishes | first_place |
// bottom4_finishes. Scrollable with the arrow keys.

use ratatui::layout::{Constraint, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
};
use ratatui::Frame;

use standings_core::report::SUMMARY_COLUMNS;
use standings_core::summary::ManagerSummary;

use crate::tui::ViewState;

/// Render the summary table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.titles.summary_title.clone());

    if state.report.summary.is_empty() {
        let paragraph = Paragraph::new("  No summary rows.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(SUMMARY_COLUMNS.iter().map(|c| Cell::from(*c))).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Borders and header take three rows
    let visible_rows = (area.height as usize).saturating_sub(3);
    let total = state.report.summary.len();
    let max_offset = total.saturating_sub(visible_rows);
    let scroll_offset = state
        .scroll_offset
        .get("summary")
        .copied()
        .unwrap_or(0)
        .min(max_offset);

    let rows: Vec<Row> = state
        .report
        .summary
        .iter()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .map(|summary| {
            let style = if state.is_hidden(&summary.manager) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Row::new(summary_cells(summary)).style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(16),
        Constraint::Length(15),
        Constraint::Length(13),
        Constraint::Length(18),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);

    if total > visible_rows {
        let mut scrollbar_state = ScrollbarState::new(max_offset).position(scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Cell text for one row, in `SUMMARY_COLUMNS` order.
pub fn summary_cells(summary: &ManagerSummary) -> [String; 5] {
    [
        summary.manager.clone(),
        summary.seasons_played.to_string(),
        summary.top4_finishes.to_string(),
        summary.first_place.to_string(),
        summary.bottom4_finishes.to_string(),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
