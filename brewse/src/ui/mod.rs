pub mod components;
pub mod layouts;
pub mod theme;

use ratatui::Frame;
use throbber_widgets_tui::ThrobberState;

use crate::locale::{Locale, TextKey};
use crate::state::{AppState, FetchStatus};
use crate::surface::Interactions;
use components::{catalog_grid, detail_popup, empty_state, loading_indicator};

/// Pure render dispatcher: walks the status decision table and builds the
/// frame's interaction registry alongside the widgets.
/// Read-only with respect to state and never mutates it.
pub fn render_app(
    f: &mut Frame,
    state: &AppState,
    locale: &Locale,
    throbber_state: &ThrobberState,
) -> Interactions {
    let mut ix = Interactions::new();
    let area = f.area();

    // Root zone backs every ancestry chain, so target-less rules match
    // clicks anywhere in the frame
    let root = ix.zone(None, area, &[]);

    // Loading suppresses everything else this pass
    if state.status == FetchStatus::Loading {
        loading_indicator::render_loading(f, area, throbber_state);
        return ix;
    }

    if state.status == FetchStatus::Error {
        empty_state::render_message(f, area, locale.get(TextKey::ApiError), theme::error_style());
    }

    let catalog_empty = state.status == FetchStatus::Ok && state.items.is_empty();
    if catalog_empty {
        empty_state::render_message(
            f,
            area,
            locale.get(TextKey::NotFound),
            theme::loading_style(),
        );
    }

    if state.status == FetchStatus::Error || catalog_empty {
        empty_state::render_repeat_button(f, area, locale, root, &mut ix);
    }

    if state.status == FetchStatus::Ok && !state.items.is_empty() {
        catalog_grid::render(f, area, &state.items, locale, root, &mut ix);

        // Overlay renders last so its zones occlude the grid
        if let Some(item) = state.selected_item() {
            detail_popup::render(f, area, item, state, locale, root, &mut ix);
        }
    }

    ix
}
