use super::AppState;
use crate::events::{Action, DataEvent};
use crate::loader::CatalogLoader;
use crate::model;

/// Apply one action to the state.
///
/// `FetchAllItems` is the only action with a side effect: it asks the loader
/// to start a fetch. Every other arm is a plain field update.
pub fn apply_action<L: CatalogLoader>(state: &mut AppState, action: Action, loader: &mut L) {
    match action {
        Action::SetStatus(status) => {
            state.status = status;
        }

        Action::FetchAllItems => {
            loader.start_fetch();
        }

        // Selection is stored by id; the payload itself is not kept
        Action::SelectItem(item) => {
            state.selected = Some(item.id);
        }

        Action::DeselectItem => {
            state.selected = None;
        }

        // Closing the menu always drops the highlighted entry
        Action::SetMenu(open) => {
            state.menu_open = open;
            if !open {
                state.menu_child = None;
            }
        }

        // Independent of menu_open: the highlight may be set while the menu
        // is closed and shows up once it opens
        Action::SelectMenuChild(index) => {
            state.menu_child = Some(index);
        }
    }
}

/// Pure state transition function for data events.
///
/// Status and items are replaced wholesale, so with several fetches in
/// flight the last resolution wins.
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::CatalogFetched { status, records } => {
            state.status = status;
            state.items = model::transform(records);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;
    use crate::state::FetchStatus;
    use crate::testing::RecordingLoader;
    use brewse_api::BeerRecord;

    fn create_test_record(id: u64) -> BeerRecord {
        BeerRecord {
            abv: 4.5,
            description: format!("Test beer {}", id),
            ibu: 40,
            id,
            image_url: format!("./images/{}.png", id),
            name: format!("Beer {}", id),
        }
    }

    fn create_test_item(id: u64) -> Item {
        Item::from(create_test_record(id))
    }

    fn apply(state: &mut AppState, action: Action) {
        let mut loader = RecordingLoader::default();
        apply_action(state, action, &mut loader);
    }

    #[test]
    fn set_status_replaces_the_status() {
        let mut state = AppState::new();

        apply(&mut state, Action::SetStatus(FetchStatus::Loading));
        assert_eq!(state.status, FetchStatus::Loading);

        apply(&mut state, Action::SetStatus(FetchStatus::Error));
        assert_eq!(state.status, FetchStatus::Error);
    }

    #[test]
    fn fetch_all_items_only_calls_the_loader() {
        let mut state = AppState::new();
        let mut loader = RecordingLoader::default();

        apply_action(&mut state, Action::FetchAllItems, &mut loader);

        assert_eq!(loader.requests, 1);
        assert_eq!(state, AppState::new());
    }

    #[test]
    fn select_item_stores_the_id_and_keeps_menu_state() {
        let mut state = AppState::new();
        state.menu_open = true;
        state.menu_child = Some(2);

        apply(&mut state, Action::SelectItem(create_test_item(7)));

        assert_eq!(state.selected, Some(7));
        assert!(state.menu_open);
        assert_eq!(state.menu_child, Some(2));
    }

    #[test]
    fn deselect_item_clears_only_the_selection() {
        let mut state = AppState::new();
        state.selected = Some(3);
        state.menu_open = true;

        apply(&mut state, Action::DeselectItem);

        assert_eq!(state.selected, None);
        assert!(state.menu_open);
    }

    #[test]
    fn closing_the_menu_clears_the_highlighted_entry() {
        let mut state = AppState::new();
        state.menu_open = true;
        state.menu_child = Some(1);

        apply(&mut state, Action::SetMenu(false));

        assert!(!state.menu_open);
        assert_eq!(state.menu_child, None);
    }

    #[test]
    fn opening_the_menu_keeps_an_existing_highlight() {
        let mut state = AppState::new();
        state.menu_child = Some(2);

        apply(&mut state, Action::SetMenu(true));

        assert!(state.menu_open);
        assert_eq!(state.menu_child, Some(2));
    }

    #[test]
    fn menu_child_updates_while_the_menu_is_closed() {
        let mut state = AppState::new();

        apply(&mut state, Action::SelectMenuChild(1));

        assert!(!state.menu_open);
        assert_eq!(state.menu_child, Some(1));
    }

    #[test]
    fn catalog_fetched_replaces_items_wholesale() {
        let mut state = AppState::new();

        reduce_data_event(
            &mut state,
            DataEvent::CatalogFetched {
                status: FetchStatus::Ok,
                records: vec![create_test_record(1), create_test_record(2)],
            },
        );
        assert_eq!(state.status, FetchStatus::Ok);
        assert_eq!(state.items.len(), 2);

        reduce_data_event(
            &mut state,
            DataEvent::CatalogFetched {
                status: FetchStatus::Ok,
                records: vec![create_test_record(9)],
            },
        );
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, 9);
    }

    #[test]
    fn error_resolution_clears_the_items() {
        let mut state = AppState::new();
        state.items = vec![create_test_item(1)];

        reduce_data_event(
            &mut state,
            DataEvent::CatalogFetched {
                status: FetchStatus::Error,
                records: Vec::new(),
            },
        );

        assert_eq!(state.status, FetchStatus::Error);
        assert!(state.items.is_empty());
    }

    #[test]
    fn reload_that_drops_the_selected_id_leaves_it_dangling() {
        let mut state = AppState::new();
        state.items = vec![create_test_item(2)];
        state.selected = Some(2);

        reduce_data_event(
            &mut state,
            DataEvent::CatalogFetched {
                status: FetchStatus::Ok,
                records: vec![create_test_record(5), create_test_record(6)],
            },
        );

        // The id stays, but it no longer resolves to an item
        assert_eq!(state.selected, Some(2));
        assert_eq!(state.selected_item(), None);
    }
}
