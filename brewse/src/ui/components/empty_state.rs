//! Error and empty-catalog banners, plus the retry control.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::events::AppEvent;
use crate::locale::{Locale, TextKey};
use crate::surface::{Interactions, Marker, ZoneId};
use crate::ui::{layouts, theme};

/// Render a single centered banner message
pub fn render_message(f: &mut Frame, area: Rect, message: &str, style: Style) {
    let line = layouts::centered_line(area, message.chars().count() as u16);
    f.render_widget(Paragraph::new(Span::styled(message, style)), line);
}

/// Render the retry button below the banner message and register its rule
pub fn render_repeat_button(
    f: &mut Frame,
    area: Rect,
    locale: &Locale,
    parent: ZoneId,
    ix: &mut Interactions,
) {
    let label = locale.get(TextKey::Repeat);
    let width = label.chars().count() as u16 + 4;
    let button_area = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height / 2 + 2,
        width,
        theme::BUTTON_HEIGHT,
    )
    .intersection(area);

    let button = Paragraph::new(Span::styled(label, theme::button_style()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, button_area);

    ix.zone(Some(parent), button_area, &[Marker::RepeatButton]);
    ix.on_click(Some(Marker::RepeatButton), None, AppEvent::RepeatDataLoading);
}
