//! Detail overlay for the selected item, with the two-level order menu.
//!
//! Zone layering mirrors the visual stack: the full-frame wrapper registers
//! after the grid so it occludes the cells, the popup interior and close icon
//! sit on the wrapper, and menu entries chain through the button even where
//! they overflow it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::events::AppEvent;
use crate::input::Key;
use crate::locale::{Locale, TextKey};
use crate::model::Item;
use crate::state::AppState;
use crate::surface::{Interactions, Marker, ZoneId};
use crate::ui::{layouts, theme};

const CLOSE_ICON: &str = "[x]";

pub fn render(
    f: &mut Frame,
    area: Rect,
    item: &Item,
    state: &AppState,
    locale: &Locale,
    parent: ZoneId,
    ix: &mut Interactions,
) {
    // Backdrop covers the whole frame; a click there (but not on the popup
    // interior) dismisses the overlay. The close icon lives on the border,
    // outside the interior, so the same rule covers it.
    let wrapper = ix.zone(Some(parent), area, &[Marker::PopupWrapper]);
    ix.on_click(
        Some(Marker::PopupWrapper),
        Some(Marker::PopupContent),
        AppEvent::DeselectItem,
    );

    let (percent_x, percent_y) = layouts::popup_sizes::DETAIL;
    let popup_area = layouts::centered_popup(percent_x, percent_y, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(item.name.as_str(), theme::title_style()))
        .borders(Borders::ALL)
        .border_style(theme::accent_border_style());
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let close_area = Rect::new(
        popup_area
            .right()
            .saturating_sub(CLOSE_ICON.len() as u16 + 1),
        popup_area.y,
        CLOSE_ICON.len() as u16,
        1,
    )
    .intersection(popup_area);
    f.render_widget(
        Paragraph::new(Span::styled(CLOSE_ICON, theme::error_style())),
        close_area,
    );
    ix.zone(Some(wrapper), close_area, &[Marker::CloseIcon]);

    let content = ix.zone(Some(wrapper), inner, &[Marker::PopupContent]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                    // bitterness
            Constraint::Length(1),                    // strength
            Constraint::Min(1),                       // description
            Constraint::Length(theme::BUTTON_HEIGHT), // order button
            Constraint::Length(1),                    // image reference
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(format!("{}: {}", locale.get(TextKey::AbbrIbu), item.ibu)),
        chunks[0],
    );
    f.render_widget(Paragraph::new(format!("{}%", item.abv)), chunks[1]);
    f.render_widget(
        Paragraph::new(item.description.as_str()).wrap(Wrap { trim: true }),
        chunks[2],
    );

    let (button_area, button) = render_order_button(f, chunks[3], state, locale, content, ix);

    f.render_widget(
        Paragraph::new(Span::styled(item.image.as_str(), theme::secondary_style())),
        chunks[4],
    );

    if state.menu_open {
        render_menu(f, area, button_area, state.menu_child, locale, button, ix);
    }

    // Escape dismisses the overlay while it is on screen
    ix.on_key(Key::Esc, AppEvent::DeselectItem);
}

fn render_order_button(
    f: &mut Frame,
    row: Rect,
    state: &AppState,
    locale: &Locale,
    content: ZoneId,
    ix: &mut Interactions,
) -> (Rect, ZoneId) {
    let label = locale.get(TextKey::Order);
    let width = label.chars().count() as u16 + 4;
    let button_area = Rect::new(row.x, row.y, width, theme::BUTTON_HEIGHT).intersection(row);

    let button = Paragraph::new(Span::styled(label, theme::button_style()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, button_area);

    let zone = ix.zone(Some(content), button_area, &[Marker::MenuButton]);

    // Closed: only a click on the button opens the menu. Open: any click
    // that is not on a menu entry closes it, wherever it lands.
    let target = if state.menu_open {
        None
    } else {
        Some(Marker::MenuButton)
    };
    ix.on_click(
        target,
        Some(Marker::MenuEntry),
        AppEvent::SetMenu(!state.menu_open),
    );

    (button_area, zone)
}

fn render_menu(
    f: &mut Frame,
    frame_area: Rect,
    button_area: Rect,
    menu_child: Option<usize>,
    locale: &Locale,
    button: ZoneId,
    ix: &mut Interactions,
) {
    let entries = [TextKey::Glass, TextKey::Can, TextKey::Box];

    // The menu drops below the button and may overflow the popup; the
    // explicit parent link keeps its chain intact regardless.
    let menu_area = Rect::new(
        button_area.x,
        button_area.bottom(),
        theme::MENU_WIDTH,
        entries.len() as u16,
    )
    .intersection(frame_area);
    f.render_widget(Clear, menu_area);
    let menu = ix.zone(Some(button), menu_area, &[]);

    for (index, key) in entries.iter().enumerate() {
        let entry_area = Rect::new(menu_area.x, menu_area.y + index as u16, menu_area.width, 1)
            .intersection(menu_area);
        if entry_area.height == 0 {
            continue;
        }

        let highlighted = menu_child == Some(index);
        let style = if highlighted {
            theme::menu_highlight_style()
        } else {
            theme::menu_entry_style()
        };
        f.render_widget(Paragraph::new(locale.get(*key)).style(style), entry_area);

        let entry = ix.zone(
            Some(menu),
            entry_area,
            &[Marker::MenuEntry, Marker::MenuEntryAt(index)],
        );
        ix.on_click(
            Some(Marker::MenuEntryAt(index)),
            None,
            AppEvent::SelectMenuChild(index),
        );

        if highlighted {
            render_quantity_menu(f, frame_area, entry_area, entry, ix);
        }
    }
}

/// Secondary menu: quantity choices nested under the highlighted entry.
/// They carry the generic entry marker so clicks on them keep the menu open,
/// but they emit nothing themselves.
fn render_quantity_menu(
    f: &mut Frame,
    frame_area: Rect,
    entry_area: Rect,
    entry: ZoneId,
    ix: &mut Interactions,
) {
    const QUANTITIES: [&str; 3] = ["1", "2", "3"];

    let submenu_area = Rect::new(
        entry_area.right(),
        entry_area.y,
        theme::SUBMENU_WIDTH,
        QUANTITIES.len() as u16,
    )
    .intersection(frame_area);
    f.render_widget(Clear, submenu_area);
    let submenu = ix.zone(Some(entry), submenu_area, &[]);

    for (index, quantity) in QUANTITIES.iter().enumerate() {
        let row = Rect::new(
            submenu_area.x,
            submenu_area.y + index as u16,
            submenu_area.width,
            1,
        )
        .intersection(submenu_area);
        if row.height == 0 {
            continue;
        }

        f.render_widget(
            Paragraph::new(*quantity).style(theme::menu_entry_style()),
            row,
        );
        ix.zone(Some(submenu), row, &[Marker::MenuEntry]);
    }
}
