//! Event to action translation.
//!
//! Translation is a pure match with no access to state; any context a
//! mutation needs lives in the reducer instead.

use crate::events::{Action, AppEvent};
use crate::state::FetchStatus;

/// Expand one event into the action sequence the reducer applies in order.
pub fn translate(event: AppEvent) -> Vec<Action> {
    match event {
        // Both fetch entry points share one sequence: show the loading
        // state, then start the fetch.
        AppEvent::InitApp | AppEvent::RepeatDataLoading => vec![
            Action::SetStatus(FetchStatus::Loading),
            Action::FetchAllItems,
        ],
        AppEvent::SelectItem(item) => vec![Action::SelectItem(item)],
        AppEvent::DeselectItem => vec![Action::DeselectItem],
        AppEvent::SetMenu(open) => vec![Action::SetMenu(open)],
        AppEvent::SelectMenuChild(index) => vec![Action::SelectMenuChild(index)],
    }
}
