//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod tab_selector;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use tab_selector::TabSelector;
pub use year_selector::YearSelector;
