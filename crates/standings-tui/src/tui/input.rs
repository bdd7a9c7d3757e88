// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into local ViewState mutations (tab
// switching, series toggling, scrolling) or into UserCommands for the
// dashboard loop (export, quit).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;
use crate::protocol::{TabId, UserCommand};

/// Rows moved by PageUp/PageDown in the summary table.
const PAGE_SIZE: usize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the dashboard loop has to act, `None` when
/// the key was handled by mutating `view_state`.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Windows reports both press and release; only act on press.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(UserCommand::Quit),
        KeyCode::Char('e') => Some(UserCommand::Export),

        KeyCode::Char('1') => {
            view_state.active_tab = TabId::Chart;
            None
        }
        KeyCode::Char('2') => {
            view_state.active_tab = TabId::Summary;
            None
        }
        KeyCode::Tab => {
            view_state.active_tab = view_state.active_tab.next();
            None
        }

        KeyCode::Up | KeyCode::Char('k') => {
            match view_state.active_tab {
                TabId::Chart => view_state.select_prev(),
                TabId::Summary => scroll_up(view_state, 1),
            }
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            match view_state.active_tab {
                TabId::Chart => view_state.select_next(),
                TabId::Summary => scroll_down(view_state, 1),
            }
            None
        }
        KeyCode::PageUp => {
            scroll_up(view_state, PAGE_SIZE);
            None
        }
        KeyCode::PageDown => {
            scroll_down(view_state, PAGE_SIZE);
            None
        }

        // Series toggling only applies to the chart
        KeyCode::Char(' ') if view_state.active_tab == TabId::Chart => {
            view_state.toggle_selected();
            None
        }
        KeyCode::Enter if view_state.active_tab == TabId::Chart => {
            view_state.isolate_selected();
            None
        }
        KeyCode::Char('a') if view_state.active_tab == TabId::Chart => {
            view_state.show_all();
            None
        }
        KeyCode::Char('n') if view_state.active_tab == TabId::Chart => {
            view_state.hide_all();
            None
        }

        KeyCode::Esc => {
            view_state.status_message = None;
            None
        }

        _ => None,
    }
}

fn scroll_up(view_state: &mut ViewState, amount: usize) {
    let offset = view_state
        .scroll_offset
        .entry("summary".to_string())
        .or_insert(0);
    *offset = offset.saturating_sub(amount);
}

/// Scroll the summary table down, never past its last row. The widget clamps
/// again against the visible height when rendering.
fn scroll_down(view_state: &mut ViewState, amount: usize) {
    let max = view_state.report.summary.len().saturating_sub(1);
    let offset = view_state
        .scroll_offset
        .entry("summary".to_string())
        .or_insert(0);
    *offset = (*offset + amount).min(max);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::sample_state;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn summary_offset(state: &ViewState) -> usize {
        state.scroll_offset.get("summary").copied().unwrap_or(0)
    }

    #[test]
    fn quit_keys() {
        let mut state = sample_state();
        assert_eq!(handle_key(press(KeyCode::Char('q')), &mut state), Some(UserCommand::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, &mut state), Some(UserCommand::Quit));
    }

    #[test]
    fn plain_c_does_not_quit() {
        let mut state = sample_state();
        assert_eq!(handle_key(press(KeyCode::Char('c')), &mut state), None);
    }

    #[test]
    fn export_key() {
        let mut state = sample_state();
        assert_eq!(handle_key(press(KeyCode::Char('e')), &mut state), Some(UserCommand::Export));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = sample_state();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(release, &mut state), None);
    }

    #[test]
    fn tab_switching() {
        let mut state = sample_state();
        handle_key(press(KeyCode::Char('2')), &mut state);
        assert_eq!(state.active_tab, TabId::Summary);
        handle_key(press(KeyCode::Char('1')), &mut state);
        assert_eq!(state.active_tab, TabId::Chart);
        handle_key(press(KeyCode::Tab), &mut state);
        assert_eq!(state.active_tab, TabId::Summary);
    }

    #[test]
    fn arrows_move_legend_selection_on_chart() {
        let mut state = sample_state();
        handle_key(press(KeyCode::Down), &mut state);
        handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(state.selected, 2);
        handle_key(press(KeyCode::Up), &mut state);
        assert_eq!(state.selected, 1);
        assert_eq!(summary_offset(&state), 0);
    }

    #[test]
    fn arrows_scroll_summary() {
        let mut state = sample_state();
        state.active_tab = TabId::Summary;
        handle_key(press(KeyCode::Down), &mut state);
        handle_key(press(KeyCode::Down), &mut state);
        assert_eq!(summary_offset(&state), 2);
        assert_eq!(state.selected, 0);

        handle_key(press(KeyCode::PageDown), &mut state);
        handle_key(press(KeyCode::PageDown), &mut state);
        assert_eq!(summary_offset(&state), 17);

        handle_key(press(KeyCode::PageUp), &mut state);
        handle_key(press(KeyCode::PageUp), &mut state);
        assert_eq!(summary_offset(&state), 0);
    }

    #[test]
    fn space_toggles_selected_series() {
        let mut state = sample_state();
        let manager = state.series[0].manager.clone();
        handle_key(press(KeyCode::Char(' ')), &mut state);
        assert!(state.is_hidden(&manager));
        handle_key(press(KeyCode::Char(' ')), &mut state);
        assert!(!state.is_hidden(&manager));
    }

    #[test]
    fn show_hide_and_isolate() {
        let mut state = sample_state();
        handle_key(press(KeyCode::Char('n')), &mut state);
        assert_eq!(state.visible_series().count(), 0);
        handle_key(press(KeyCode::Char('a')), &mut state);
        assert_eq!(state.visible_series().count(), 18);
        handle_key(press(KeyCode::Enter), &mut state);
        assert_eq!(state.visible_series().count(), 1);
    }

    #[test]
    fn toggling_is_inactive_on_summary_tab() {
        let mut state = sample_state();
        state.active_tab = TabId::Summary;
        handle_key(press(KeyCode::Char(' ')), &mut state);
        handle_key(press(KeyCode::Char('n')), &mut state);
        assert!(state.hidden.is_empty());
    }

    #[test]
    fn esc_clears_status_message() {
        let mut state = sample_state();
        state.status_message = Some("Exported".into());
        handle_key(press(KeyCode::Esc), &mut state);
        assert!(state.status_message.is_none());
    }
}
