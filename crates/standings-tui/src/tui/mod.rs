// TUI dashboard: layout, input handling, and widget rendering.
//
// The dashboard owns a `ViewState` built once from the standings report. The
// report itself never changes; only the view (active tab, hidden series,
// selection, scroll) does. Rendering runs on a ~30 fps tick.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tracing::{error, info};

use standings_core::config::{ChartConfig, Config, ReportConfig};
use standings_core::export;
use standings_core::report::StandingsReport;
use standings_core::tidy::ManagerSeries;

use crate::protocol::{TabId, UserCommand};
use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Everything the widgets read to draw a frame.
pub struct ViewState {
    /// The pipeline output. Read-only for the lifetime of the dashboard.
    pub report: StandingsReport,
    /// Chart series, one per manager, ordered by manager name.
    pub series: Vec<ManagerSeries>,
    /// Titles from `[report]` in standings.toml.
    pub titles: ReportConfig,
    pub chart: ChartConfig,
    /// Which tab is active in the main panel.
    pub active_tab: TabId,
    /// Managers whose series are toggled off.
    pub hidden: HashSet<String>,
    /// Index into `series` of the legend selection.
    pub selected: usize,
    /// Per-widget scroll offsets (keyed by widget name).
    pub scroll_offset: HashMap<String, usize>,
    /// One-line feedback shown in the status bar (export results, errors).
    pub status_message: Option<String>,
}

impl ViewState {
    pub fn new(report: StandingsReport, config: &Config) -> Self {
        let series = report.series();
        ViewState {
            report,
            series,
            titles: config.report.clone(),
            chart: config.chart.clone(),
            active_tab: TabId::default(),
            hidden: HashSet::new(),
            selected: 0,
            scroll_offset: HashMap::new(),
            status_message: None,
        }
    }

    pub fn is_hidden(&self, manager: &str) -> bool {
        self.hidden.contains(manager)
    }

    /// Series currently drawn on the chart, with their legend index.
    pub fn visible_series(&self) -> impl Iterator<Item = (usize, &ManagerSeries)> + '_ {
        self.series
            .iter()
            .enumerate()
            .filter(|(_, s)| !self.is_hidden(&s.manager))
    }

    pub fn selected_series(&self) -> Option<&ManagerSeries> {
        self.series.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.series.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Show or hide the selected manager's series.
    pub fn toggle_selected(&mut self) {
        let Some(manager) = self.selected_series().map(|s| s.manager.clone()) else {
            return;
        };
        if !self.hidden.remove(&manager) {
            self.hidden.insert(manager);
        }
    }

    pub fn show_all(&mut self) {
        self.hidden.clear();
    }

    pub fn hide_all(&mut self) {
        self.hidden = self.series.iter().map(|s| s.manager.clone()).collect();
    }

    /// Hide every series except the selected one.
    pub fn isolate_selected(&mut self) {
        let Some(keep) = self.selected_series().map(|s| s.manager.clone()) else {
            return;
        };
        self.hide_all();
        self.hidden.remove(&keep);
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Carry out a command from the input handler. Returns `false` when the
/// dashboard should exit.
pub fn handle_command(state: &mut ViewState, command: UserCommand, export_dir: &Path) -> bool {
    match command {
        UserCommand::Quit => false,
        UserCommand::Export => {
            match export::write_all(&state.report, export_dir) {
                Ok(paths) => {
                    info!("Exported {} files to {}", paths.len(), export_dir.display());
                    state.status_message = Some(format!(
                        "Exported {} files to {}",
                        paths.len(),
                        export_dir.display()
                    ));
                }
                Err(e) => {
                    error!("Export failed: {}", e);
                    state.status_message = Some(format!("Export failed: {e}"));
                }
            }
            true
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    match state.active_tab {
        TabId::Chart => {
            widgets::standings_chart::render(frame, layout.chart, state);
            widgets::legend::render(frame, layout.legend, state);
        }
        TabId::Summary => {
            widgets::summary_table::render(frame, layout.main_panel, state);
        }
    }
    widgets::help_bar::render(frame, layout.help_bar, state);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop over keyboard input and render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(report: StandingsReport, config: &Config) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let export_dir = PathBuf::from(&config.export.dir);
    let mut view_state = ViewState::new(report, config);
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(command) = input::handle_key(key_event, &mut view_state) {
                            if !handle_command(&mut view_state, command, &export_dir) {
                                break Ok(());
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events: the next tick redraws
                    }
                    Some(Err(e)) => break Err(anyhow::Error::new(e).context("terminal input error")),
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(anyhow::Error::new(e).context("failed to draw frame"));
                }
            }
        }
    };

    ratatui::restore();
    result
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn new_state_shows_everything() {
        let state = sample_state();
        assert_eq!(state.series.len(), 18);
        assert_eq!(state.visible_series().count(), 18);
        assert_eq!(state.active_tab, TabId::Chart);
        assert_eq!(state.selected, 0);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn toggle_hides_then_shows() {
        let mut state = sample_state();
        let first = state.series[0].manager.clone();
        state.toggle_selected();
        assert!(state.is_hidden(&first));
        assert_eq!(state.visible_series().count(), 17);
        state.toggle_selected();
        assert!(!state.is_hidden(&first));
    }

    #[test]
    fn isolate_keeps_only_selected() {
        let mut state = sample_state();
        state.selected = 3;
        state.isolate_selected();
        let visible: Vec<usize> = state.visible_series().map(|(i, _)| i).collect();
        assert_eq!(visible, vec![3]);

        state.show_all();
        assert_eq!(state.visible_series().count(), 18);
    }

    #[test]
    fn hide_all_hides_every_series() {
        let mut state = sample_state();
        state.hide_all();
        assert_eq!(state.visible_series().count(), 0);
    }

    #[test]
    fn selection_is_clamped() {
        let mut state = sample_state();
        state.select_prev();
        assert_eq!(state.selected, 0);
        for _ in 0..50 {
            state.select_next();
        }
        assert_eq!(state.selected, 17);
    }

    #[test]
    fn empty_state_tolerates_every_action() {
        let mut state = empty_state();
        state.select_next();
        state.toggle_selected();
        state.isolate_selected();
        state.hide_all();
        assert!(state.selected_series().is_none());
        assert_eq!(state.visible_series().count(), 0);
    }

    #[test]
    fn quit_command_stops_loop() {
        let mut state = sample_state();
        assert!(!handle_command(&mut state, UserCommand::Quit, Path::new("unused")));
    }

    #[test]
    fn export_command_writes_files_and_reports() {
        let dir = std::env::temp_dir().join("standings_tui_export_cmd");
        let _ = std::fs::remove_dir_all(&dir);
        let mut state = sample_state();

        assert!(handle_command(&mut state, UserCommand::Export, &dir));
        assert!(dir.join(export::SUMMARY_CSV).is_file());
        let message = state.status_message.clone().unwrap();
        assert!(message.starts_with("Exported 3 files"), "{message}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_failure_is_reported_not_fatal() {
        // A regular file where the export directory should be
        let blocker = std::env::temp_dir().join("standings_tui_export_blocker");
        let _ = std::fs::remove_dir_all(&blocker);
        std::fs::write(&blocker, "not a dir").unwrap();
        let mut state = sample_state();

        assert!(handle_command(&mut state, UserCommand::Export, &blocker));
        let message = state.status_message.clone().unwrap();
        assert!(message.starts_with("Export failed"), "{message}");

        let _ = std::fs::remove_file(&blocker);
    }

    #[test]
    fn render_frame_both_tabs() {
        let backend = ratatui::backend::TestBackend::new(120, 40);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = sample_state();
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
        state.active_tab = TabId::Summary;
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
    }

    #[test]
    fn render_frame_empty_report() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = empty_state();
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
        state.active_tab = TabId::Summary;
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
    }
}
