pub mod catalog_grid;
pub mod detail_popup;
pub mod empty_state;
pub mod loading_indicator;
