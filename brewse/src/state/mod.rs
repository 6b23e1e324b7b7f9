pub mod reducer;

use crate::model::Item;

/// Outcome of the most recent catalog fetch
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Resting state; also the boot state before the first fetch starts
    #[default]
    Ok,
    Loading,
    Error,
}

/// Single source of truth for everything the UI renders
#[derive(Default, Debug, Clone, PartialEq)]
pub struct AppState {
    /// Outcome of the most recent fetch
    pub status: FetchStatus,
    /// The catalog, replaced wholesale by every fetch resolution
    pub items: Vec<Item>,
    /// Id of the item shown in the detail overlay
    pub selected: Option<u64>,
    /// Whether the order menu inside the overlay is open
    pub menu_open: bool,
    /// Highlighted primary order menu entry
    pub menu_child: Option<usize>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the selected id against the current item list.
    ///
    /// Selection is stored by id, so a reload that drops the id leaves it
    /// dangling; resolution then yields None and the overlay disappears.
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected
            .and_then(|id| self.items.iter().find(|item| item.id == id))
    }
}
