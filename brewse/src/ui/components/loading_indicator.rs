use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use throbber_widgets_tui::ThrobberState;

use crate::ui::{layouts, theme};

const LOADING_MESSAGE: &str = "loading ...";

/// Render a centered throbber followed by the loading message
pub fn render_loading(f: &mut Frame, area: Rect, throbber_state: &ThrobberState) {
    let line = layouts::centered_line(area, LOADING_MESSAGE.len() as u16 + 2);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(line);

    let throbber =
        throbber_widgets_tui::Throbber::default().throbber_set(throbber_widgets_tui::BRAILLE_EIGHT);
    f.render_stateful_widget(throbber, chunks[0], &mut throbber_state.clone());

    f.render_widget(
        Paragraph::new(Span::styled(LOADING_MESSAGE, theme::loading_style())),
        chunks[1],
    );
}
