//! The catalog grid: one bordered cell per item, plus a count footer.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::events::AppEvent;
use crate::locale::{Locale, TextKey};
use crate::model::Item;
use crate::surface::{Interactions, Marker, ZoneId};
use crate::ui::{layouts, theme};

pub fn render(
    f: &mut Frame,
    area: Rect,
    items: &[Item],
    locale: &Locale,
    parent: ZoneId,
    ix: &mut Interactions,
) {
    let (content_area, footer_area) = layouts::catalog_layout(area);
    let grid = ix.zone(Some(parent), content_area, &[]);

    let cells = layouts::grid_cells(
        content_area,
        theme::CELL_WIDTH,
        theme::CELL_HEIGHT,
        items.len(),
    );
    for (item, cell) in items.iter().zip(cells.iter()) {
        render_cell(f, *cell, item, locale, grid, ix);
    }

    let footer = Paragraph::new(Span::styled(
        format!("{} of {} items", cells.len(), items.len()),
        theme::secondary_style(),
    ))
    .alignment(Alignment::Right);
    f.render_widget(footer, footer_area);
}

fn render_cell(
    f: &mut Frame,
    cell: Rect,
    item: &Item,
    locale: &Locale,
    grid: ZoneId,
    ix: &mut Interactions,
) {
    ix.zone(Some(grid), cell, &[Marker::ItemCell(item.id)]);
    ix.on_click(
        Some(Marker::ItemCell(item.id)),
        None,
        AppEvent::SelectItem(item.clone()),
    );

    // Long names clip at the border
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(item.name.as_str(), theme::title_style()));
    let inner = block.inner(cell);
    f.render_widget(block, cell);

    let lines = vec![
        Line::from(format!("{}: {}", locale.get(TextKey::AbbrIbu), item.ibu)),
        Line::from(format!("{}%", item.abv)),
        Line::from(Span::styled(item.image.as_str(), theme::secondary_style())),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
