use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use throbber_widgets_tui::ThrobberState;

use crate::app_core::AppCore;
use crate::events::{AppEvent, DataEvent};
use crate::input::Key;
use crate::loader::CatalogLoader;
use crate::locale::Locale;
use crate::state::{AppState, FetchStatus};
use crate::surface::{Interactions, Marker};
use brewse_api::BeerRecord;

/// Loader stand-in for tests: records fetch requests instead of spawning
/// tasks. Resolutions are injected through [`TestApp::resolve_fetch`].
#[derive(Debug, Default)]
pub struct RecordingLoader {
    pub requests: usize,
}

impl CatalogLoader for RecordingLoader {
    fn start_fetch(&mut self) {
        self.requests += 1;
    }
}

/// In-memory application driver mirroring the production shell: a core over
/// a recording loader, a TestBackend terminal, and the interaction registry
/// of the last drawn frame.
pub struct TestApp {
    core: AppCore<RecordingLoader>,
    terminal: Terminal<TestBackend>,
    locale: Locale,
    throbber_state: ThrobberState,
    interactions: Interactions,
}

impl TestApp {
    /// Create a test app with the default 80x30 terminal
    pub fn new() -> Self {
        Self::with_size(80, 30)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");

        Self {
            core: AppCore::new(RecordingLoader::default()),
            terminal,
            locale: Locale::default(),
            throbber_state: ThrobberState::default(),
            interactions: Interactions::new(),
        }
    }

    /// Feed one semantic event through the translator and reducers
    pub fn send_event(&mut self, event: AppEvent) {
        self.core.handle_event(event);
    }

    /// Resolve an outstanding fetch, as if a spawned task completed
    pub fn resolve_fetch(&mut self, status: FetchStatus, records: Vec<BeerRecord>) {
        self.core
            .handle_data_event(DataEvent::CatalogFetched { status, records });
    }

    /// Draw one frame and swap in its interaction registry, exactly as the
    /// production loop does after each pass
    pub fn draw(&mut self) {
        let Self {
            core,
            terminal,
            locale,
            throbber_state,
            interactions,
        } = self;

        let mut next = Interactions::new();
        terminal
            .draw(|f| {
                next = crate::ui::render_app(f, core.state(), locale, throbber_state);
            })
            .expect("test backend draw");
        *interactions = next;
    }

    /// Dispatch a click at absolute coordinates against the last frame
    pub fn click(&mut self, x: u16, y: u16) {
        for event in self.interactions.dispatch_click(x, y) {
            self.core.handle_event(event);
        }
    }

    /// Click the center of the first zone carrying `marker`
    pub fn click_marker(&mut self, marker: Marker) {
        let rect = self
            .interactions
            .find_zone(marker)
            .unwrap_or_else(|| panic!("no zone with marker {:?} in the last frame", marker));
        self.click(rect.x + rect.width / 2, rect.y + rect.height / 2);
    }

    /// Dispatch a key press against the last frame
    pub fn press(&mut self, key: Key) {
        for event in self.interactions.dispatch_key(key) {
            self.core.handle_event(event);
        }
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    /// Interaction registry of the last drawn frame
    pub fn interactions(&self) -> &Interactions {
        &self.interactions
    }

    /// Number of fetches the loader has been asked to start
    pub fn fetch_requests(&self) -> usize {
        self.core.loader().requests
    }

    /// Rendered buffer of the last drawn frame
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Buffer contents flattened to a newline-joined string, for text
    /// presence assertions
    pub fn buffer_text(&self) -> String {
        let buffer = self.buffer();
        let mut text = String::new();
        for y in buffer.area.top()..buffer.area.bottom() {
            for x in buffer.area.left()..buffer.area.right() {
                let symbol = buffer
                    .cell((x, y))
                    .map(|cell| cell.symbol())
                    .unwrap_or(" ");
                text.push_str(symbol);
            }
            text.push('\n');
        }
        text
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
