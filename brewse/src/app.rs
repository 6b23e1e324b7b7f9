use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;
use throbber_widgets_tui::ThrobberState;

use crate::app_core::AppCore;
use crate::config::Settings;
use crate::events::AppEvent;
use crate::input::{self, KeyEvent};
use crate::loader::FetchLoader;
use crate::locale::Locale;
use crate::logging::init_logging;
use crate::state::FetchStatus;
use crate::surface::Interactions;
use brewse_api::Client;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let log_path = init_logging()?;
        tracing::info!("brewse starting, logging to {}", log_path.display());

        let mut terminal = self.init()?;

        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();

        let api_client = Arc::new(Client::new(&self.settings.api_url));
        let loader = FetchLoader::new(api_client, data_tx, self.settings.sample_fallback);

        let locale = Locale::default();
        let mut core = AppCore::new(loader);
        let mut throbber_state = ThrobberState::default();

        // Registry of the last completed frame; raw events resolve against
        // this even if a later draw fails
        let mut interactions = Interactions::new();

        let mut event_stream = EventStream::new();

        core.handle_event(AppEvent::InitApp);

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        let mut quit = false;
        while !quit {
            let mut next = Interactions::new();
            match terminal.draw(|f| {
                next = crate::ui::render_app(f, core.state(), &locale, &throbber_state);
            }) {
                Ok(_) => interactions = next,
                // The previous frame and its registry stay live
                Err(e) => tracing::error!("Draw failed, keeping previous frame: {}", e),
            }

            tokio::select! {
                _ = interval.tick() => {
                    if core.state().status == FetchStatus::Loading {
                        throbber_state.calc_next();
                    }
                }
                Some(Ok(event)) = event_stream.next() => {
                    match event {
                        Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => {
                            tracing::debug!("Key press: {:?}", key);
                            let key = KeyEvent::from(key);
                            for app_event in interactions.dispatch_key(key.key) {
                                tracing::info!("Dispatching event: {:?}", app_event);
                                core.handle_event(app_event);
                            }
                            if input::is_quit(key) {
                                quit = true;
                            }
                        }
                        Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) => {
                            tracing::debug!("Click at ({}, {})", mouse.column, mouse.row);
                            for app_event in interactions.dispatch_click(mouse.column, mouse.row) {
                                tracing::info!("Dispatching event: {:?}", app_event);
                                core.handle_event(app_event);
                            }
                        }
                        _ => {
                            // Ignore other events
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    core.handle_data_event(data_event);
                }
            }
        }

        tracing::info!("Quit requested, exiting event loop");

        self.exit(terminal)?;

        Ok(())
    }

    fn init(&self) -> Result<Terminal<CrosstermBackend<std::io::Stdout>>, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(
        &self,
        mut terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
