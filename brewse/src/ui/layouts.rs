//! Reusable layout builders for consistent screen structure.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{FOOTER_HEIGHT, SCREEN_MARGIN};

/// Split the frame into the catalog content area and the item-count footer.
///
/// Returns a tuple of (content_area, footer_area)
pub fn catalog_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(SCREEN_MARGIN)
        .constraints([Constraint::Min(1), Constraint::Length(FOOTER_HEIGHT)])
        .split(area);

    (chunks[0], chunks[1])
}

/// Row-major grid of fixed-size cells; only cells that fit entirely inside
/// the area are produced.
pub fn grid_cells(area: Rect, cell_width: u16, cell_height: u16, count: usize) -> Vec<Rect> {
    let cols = (area.width / cell_width) as usize;
    let rows = (area.height / cell_height) as usize;
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    (0..count.min(cols * rows))
        .map(|index| {
            let col = (index % cols) as u16;
            let row = (index / cols) as u16;
            Rect::new(
                area.x + col * cell_width,
                area.y + row * cell_height,
                cell_width,
                cell_height,
            )
        })
        .collect()
}

/// A single centered row of the given width, for short banner messages.
pub fn centered_line(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height / 2,
        width,
        1,
    )
    .intersection(area)
}

/// Create a centered popup rectangle.
///
/// # Arguments
/// * `percent_x` - Width as percentage of parent (0-100)
/// * `percent_y` - Height as percentage of parent (0-100)
/// * `area` - The parent area to center within
pub fn centered_popup(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Standard popup sizes
pub mod popup_sizes {
    /// Detail overlay (70% x 70%)
    pub const DETAIL: (u16, u16) = (70, 70);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_fills_rows_before_columns() {
        let cells = grid_cells(Rect::new(0, 0, 30, 10), 10, 5, 5);

        // 3 columns x 2 rows fit; only 5 requested
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0], Rect::new(0, 0, 10, 5));
        assert_eq!(cells[2], Rect::new(20, 0, 10, 5));
        assert_eq!(cells[3], Rect::new(0, 5, 10, 5));
    }

    #[test]
    fn grid_caps_cells_at_what_fits() {
        let cells = grid_cells(Rect::new(0, 0, 30, 10), 10, 5, 100);
        assert_eq!(cells.len(), 6);
    }

    #[test]
    fn grid_in_a_too_small_area_is_empty() {
        assert!(grid_cells(Rect::new(0, 0, 8, 10), 10, 5, 3).is_empty());
        assert!(grid_cells(Rect::new(0, 0, 30, 3), 10, 5, 3).is_empty());
    }

    #[test]
    fn centered_line_stays_inside_the_area() {
        let area = Rect::new(0, 0, 80, 30);
        let line = centered_line(area, 20);

        assert_eq!(line.height, 1);
        assert_eq!(line.width, 20);
        assert!(area.contains(ratatui::layout::Position {
            x: line.x,
            y: line.y
        }));
    }
}
