use crate::events::{AppEvent, DataEvent};
use crate::loader::CatalogLoader;
use crate::state::{reducer, AppState};
use crate::translator;

/// Testable application core without terminal dependencies
///
/// Generic over L (loader) for zero-cost abstraction. The loader type
/// determines what a fetch does: in production it spawns tasks, in tests it
/// only records the request.
pub struct AppCore<L: CatalogLoader> {
    state: AppState,
    loader: L,
}

impl<L: CatalogLoader> AppCore<L> {
    /// Create a new application core with the given loader
    pub fn new(loader: L) -> Self {
        Self {
            state: AppState::new(),
            loader,
        }
    }

    /// Handle one semantic UI event.
    ///
    /// This is the main entry point for user input. It:
    /// 1. Translates the event into its action sequence
    /// 2. Applies each action to the state, in order
    pub fn handle_event(&mut self, event: AppEvent) {
        for action in translator::translate(event) {
            reducer::apply_action(&mut self.state, action, &mut self.loader);
        }
    }

    /// Handle a data event (fetch resolutions, injected directly in tests)
    pub fn handle_data_event(&mut self, event: DataEvent) {
        reducer::reduce_data_event(&mut self.state, event);
    }

    /// Get read-only access to the current state (for rendering or assertions)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get read-only access to the loader (test assertions on fetch counts)
    pub fn loader(&self) -> &L {
        &self.loader
    }
}
