use brewse_api::BeerRecord;

use crate::model::Item;
use crate::state::FetchStatus;

/// Semantic UI events (user intent → state changes)
///
/// Emitted by interaction rules when a click or key press resolves, or
/// injected directly by tests. The translator expands each event into a
/// fixed action sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// First event of a session; starts the initial catalog fetch
    InitApp,
    /// Retry after an error or an empty catalog
    RepeatDataLoading,
    /// Open the detail overlay for one item
    SelectItem(Item),
    /// Close the detail overlay
    DeselectItem,
    /// Open or close the order menu inside the overlay
    SetMenu(bool),
    /// Highlight one primary order menu entry
    SelectMenuChild(usize),
}

/// State mutations produced by the translator, applied in order by the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetStatus(FetchStatus),
    FetchAllItems,
    SelectItem(Item),
    DeselectItem,
    SetMenu(bool),
    SelectMenuChild(usize),
}

/// Results arriving from spawned fetch tasks over the data channel
#[derive(Debug, Clone, PartialEq)]
pub enum DataEvent {
    /// One catalog fetch resolved. Failures arrive with an empty record
    /// list; when several fetches are in flight the last resolution wins.
    CatalogFetched {
        status: FetchStatus,
        records: Vec<BeerRecord>,
    },
}
