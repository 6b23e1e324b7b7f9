mod app;
pub mod app_core;
pub mod config;
pub mod events;
pub mod input;
pub mod loader;
pub mod locale;
pub mod logging;
pub mod model;
pub mod state;
pub mod surface;
pub mod translator;
pub mod ui;

pub use app::App;
pub use config::Settings;

// Always expose testing module (integration tests need it)
pub mod testing;
