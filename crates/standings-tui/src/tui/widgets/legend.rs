// Legend widget: one entry per manager with its series color.
//
// Hidden series are dimmed. The selected entry is marked with '>' and its
// per-season ranks are listed beneath the list.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use standings_core::season::Season;
use standings_core::tidy::ManagerSeries;

use super::series_color;
use crate::tui::ViewState;

/// Rows reserved for the selected manager's details.
const DETAIL_HEIGHT: u16 = 6;

/// Render the legend into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(DETAIL_HEIGHT)])
        .split(area);

    render_list(frame, sections[0], state);
    render_details(frame, sections[1], state);
}

fn render_list(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.titles.legend_title.clone());

    if state.series.is_empty() {
        let paragraph = Paragraph::new("  No managers.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_rows = (area.height as usize).saturating_sub(2);
    let offset = list_offset(state.selected, visible_rows, state.series.len());

    let items: Vec<ListItem> = state
        .series
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows.max(1))
        .map(|(index, series)| {
            legend_item(
                series,
                series_color(index),
                index == state.selected,
                state.is_hidden(&series.manager),
            )
        })
        .collect();

    let shown = state.visible_series().count();
    let footer = format!(" {}/{} shown ", shown, state.series.len());
    let list = List::new(items).block(block.title_bottom(footer));
    frame.render_widget(list, area);
}

fn legend_item<'a>(
    series: &ManagerSeries,
    color: Color,
    selected: bool,
    hidden: bool,
) -> ListItem<'a> {
    let marker = if selected { ">" } else { " " };
    let (swatch, swatch_style, name_style) = if hidden {
        let dim = Style::default().fg(Color::DarkGray);
        ("··", dim, dim)
    } else {
        (
            "━━",
            Style::default().fg(color),
            Style::default().fg(Color::White),
        )
    };
    let name_style = if selected {
        name_style.add_modifier(Modifier::BOLD)
    } else {
        name_style
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{swatch} "), swatch_style),
        Span::styled(series.manager.clone(), name_style),
    ]))
}

fn render_details(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (title, lines) = match state.selected_series() {
        Some(series) => (
            series.manager.clone(),
            detail_lines(series, &state.report.axes.season_order),
        ),
        None => ("Details".to_string(), Vec::new()),
    };

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

/// One line per season: "2023  rank 6", or "2022  --" when absent.
pub fn detail_lines(series: &ManagerSeries, order: &[Season]) -> Vec<Line<'static>> {
    order
        .iter()
        .map(|season| {
            let value = series
                .rank_in(*season)
                .map(|rank| format!("rank {rank}"))
                .unwrap_or_else(|| "--".to_string());
            Line::from(vec![
                Span::styled(format!("{season}  "), Style::default().fg(Color::Gray)),
                Span::raw(value),
            ])
        })
        .collect()
}

/// First list row to draw so that `selected` stays on screen.
pub fn list_offset(selected: usize, visible_rows: usize, total: usize) -> usize {
    if visible_rows == 0 || total <= visible_rows {
        return 0;
    }
    let max_offset = total - visible_rows;
    selected.saturating_sub(visible_rows - 1).min(max_offset)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
