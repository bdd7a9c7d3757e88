// Standings chart: one line per visible manager, seasons along the x axis,
// rank on the y axis with first place at the top.
//
// Seasons are categories: each sits at an integer x position taken from the
// report's season order, so the axis never shows in-between values. Ranks are
// flipped (y = 19 - rank) so the best finish is drawn highest.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use standings_core::config::MarkerStyle;
use standings_core::report::AxisSpec;
use standings_core::season::{Rank, Season, SLOTS_PER_SEASON};
use standings_core::tidy::ManagerSeries;

use super::series_color;
use crate::tui::ViewState;

/// Render the chart into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.titles.chart_title.clone());

    // Draw the selected series last so it sits on top of overlapping lines.
    let mut visible: Vec<(usize, &ManagerSeries)> = state.visible_series().collect();
    visible.sort_by_key(|(index, _)| *index == state.selected);

    if visible.is_empty() {
        let message = if state.series.is_empty() {
            "  No managers to display."
        } else {
            "  All managers hidden. Press 'a' to show all."
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let axes = &state.report.axes;
    let points: Vec<(usize, &str, Vec<(f64, f64)>)> = visible
        .iter()
        .map(|(index, series)| (*index, series.manager.as_str(), series_points(series, axes)))
        .collect();

    let marker = marker_for(state.chart.marker);
    let mut datasets = Vec::with_capacity(points.len() * 2);
    for (index, manager, data) in &points {
        let mut style = Style::default().fg(series_color(*index));
        if *index == state.selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        datasets.push(
            Dataset::default()
                .name(manager.to_string())
                .marker(marker)
                .graph_type(GraphType::Line)
                .style(style)
                .data(data),
        );
        if state.chart.show_points {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(style)
                    .data(data),
            );
        }
    }

    let last_x = axes.season_order.len().saturating_sub(1) as f64;
    let inner_height = area.height.saturating_sub(4);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Season")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, last_x])
                .labels(season_axis_labels(&axes.season_order)),
        )
        .y_axis(
            Axis::default()
                .title("Rank")
                .style(Style::default().fg(Color::Gray))
                .bounds([plot_y(Rank::WORST), plot_y(Rank::BEST)])
                .labels(rank_axis_labels(inner_height)),
        )
        .legend_position(None);

    frame.render_widget(chart, area);
}

/// Vertical position of a rank: rank 1 maps to the top of the axis.
pub fn plot_y(rank: Rank) -> f64 {
    (SLOTS_PER_SEASON as f64 + 1.0) - rank.get() as f64
}

/// Horizontal position of a season: its index in the category order.
pub fn plot_x(season: Season, axes: &AxisSpec) -> Option<f64> {
    axes.season_order
        .iter()
        .position(|s| *s == season)
        .map(|i| i as f64)
}

/// Chart coordinates for one manager, in season order.
pub fn series_points(series: &ManagerSeries, axes: &AxisSpec) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = series
        .points
        .iter()
        .filter_map(|(season, rank)| plot_x(*season, axes).map(|x| (x, plot_y(*rank))))
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points
}

pub fn season_axis_labels(order: &[Season]) -> Vec<String> {
    order.iter().map(|s| s.label().to_string()).collect()
}

/// Y-axis labels, bottom to top. Every rank gets a label when there is a row
/// for each; otherwise only the extremes are labelled.
pub fn rank_axis_labels(height: u16) -> Vec<String> {
    if height as usize >= SLOTS_PER_SEASON {
        (1..=SLOTS_PER_SEASON).rev().map(|r| r.to_string()).collect()
    } else {
        vec![Rank::WORST.to_string(), Rank::BEST.to_string()]
    }
}

fn marker_for(style: MarkerStyle) -> Marker {
    match style {
        MarkerStyle::Braille => Marker::Braille,
        MarkerStyle::Dot => Marker::Dot,
        MarkerStyle::Block => Marker::Block,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
