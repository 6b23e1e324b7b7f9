//! Centralized theme constants and style functions for consistent UI styling.
//!
//! All colors, layout constants, and common styles should be defined here
//! to ensure visual consistency across all screens and components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Colors
// =============================================================================

/// Color for screen titles and accent text
pub const COLOR_TITLE: Color = Color::Cyan;

/// Color for loading/status messages
pub const COLOR_LOADING: Color = Color::Yellow;

/// Color for error messages
pub const COLOR_ERROR: Color = Color::Red;

/// Color for secondary information (image references, footer counts)
pub const COLOR_SECONDARY: Color = Color::DarkGray;

/// Border color for accent/highlighted elements
pub const COLOR_BORDER_ACCENT: Color = Color::Cyan;

/// Background color for menu entries
pub const COLOR_MENU_BG: Color = Color::DarkGray;

/// Background color for the highlighted menu entry
pub const COLOR_MENU_HIGHLIGHT_BG: Color = Color::Cyan;

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 1;

/// Width of one catalog grid cell, border included
pub const CELL_WIDTH: u16 = 26;

/// Height of one catalog grid cell, border included
pub const CELL_HEIGHT: u16 = 7;

/// Height of the item-count footer under the grid
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of button-like controls (retry, order)
pub const BUTTON_HEIGHT: u16 = 3;

/// Width of the order menu and its entries
pub const MENU_WIDTH: u16 = 12;

/// Width of the secondary quantity menu
pub const SUBMENU_WIDTH: u16 = 5;

// =============================================================================
// Style Functions
// =============================================================================

/// Style for titles and item names
pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for loading/status messages
pub fn loading_style() -> Style {
    Style::default().fg(COLOR_LOADING)
}

/// Style for error messages
pub fn error_style() -> Style {
    Style::default()
        .fg(COLOR_ERROR)
        .add_modifier(Modifier::BOLD)
}

/// Style for secondary information
pub fn secondary_style() -> Style {
    Style::default().fg(COLOR_SECONDARY)
}

/// Style for accent borders
pub fn accent_border_style() -> Style {
    Style::default().fg(COLOR_BORDER_ACCENT)
}

/// Style for button labels
pub fn button_style() -> Style {
    Style::default()
        .fg(COLOR_TITLE)
        .add_modifier(Modifier::BOLD)
}

/// Style for menu entries
pub fn menu_entry_style() -> Style {
    Style::default().fg(Color::White).bg(COLOR_MENU_BG)
}

/// Style for the highlighted menu entry
pub fn menu_highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(COLOR_MENU_HIGHLIGHT_BG)
        .add_modifier(Modifier::BOLD)
}
