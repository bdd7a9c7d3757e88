// Help bar widget: keyboard shortcuts for the active tab.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::TabId;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(state.active_tab),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub fn help_text(tab: TabId) -> &'static str {
    match tab {
        TabId::Chart => {
            " q:Quit | 1-2/Tab:Tabs | ↑↓:Select | Space:Show/hide | Enter:Only | a:All | n:None | e:Export"
        }
        TabId::Summary => " q:Quit | 1-2/Tab:Tabs | ↑↓/PgUp/PgDn:Scroll | e:Export",
    }
}
