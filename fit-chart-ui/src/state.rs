//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use fit_core::{Tab, YearOptions};
use fit_db::Database;
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded tables (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the data is still loading
    pub loading: Signal<bool>,
    /// Error message if loading failed
    pub error_msg: Signal<Option<String>>,
    /// Tab currently shown; None before loading finishes or for an unknown tab value
    pub active_tab: Signal<Option<Tab>>,
    /// Years offered on the Freedom tab
    pub freedom_years: Signal<YearOptions>,
    /// Years offered on the Self-Immolation tab
    pub incident_years: Signal<YearOptions>,
    /// Selected Freedom year
    pub freedom_year: Signal<Option<i32>>,
    /// Selected Self-Immolation year
    pub incident_year: Signal<Option<i32>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            active_tab: Signal::new(None),
            freedom_years: Signal::new(YearOptions::default()),
            incident_years: Signal::new(YearOptions::default()),
            freedom_year: Signal::new(None),
            incident_year: Signal::new(None),
        }
    }

    /// Install a loaded database: derive the year options, select the most
    /// recent year of each table and show `initial_tab`.
    pub fn install(&mut self, db: Database, initial_tab: Tab) -> anyhow::Result<()> {
        let freedom_years = YearOptions::from_years(db.query_freedom_years()?);
        let incident_years = YearOptions::from_years(db.query_incident_years()?);
        self.freedom_year.set(freedom_years.default_year());
        self.incident_year.set(incident_years.default_year());
        self.freedom_years.set(freedom_years);
        self.incident_years.set(incident_years);
        self.db.set(Some(db));
        self.active_tab.set(Some(initial_tab));
        self.loading.set(false);
        Ok(())
    }

    /// Switch the content area to `tab`. Entering a tab with a year dropdown
    /// resets it to the most recent year. Re-selecting the shown tab is a
    /// no-op.
    pub fn select_tab(&mut self, tab: Option<Tab>) {
        if *self.active_tab.peek() == tab {
            return;
        }
        let freedom_year = year_after_select(
            tab,
            Tab::Freedom,
            &self.freedom_years.peek(),
            *self.freedom_year.peek(),
        );
        let incident_year = year_after_select(
            tab,
            Tab::SelfImmolation,
            &self.incident_years.peek(),
            *self.incident_year.peek(),
        );
        self.freedom_year.set(freedom_year);
        self.incident_year.set(incident_year);
        self.active_tab.set(tab);
    }

    /// Record a fatal load error.
    pub fn fail(&mut self, message: String) {
        log::error!("{}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}

/// Year held by `dropdown_tab`'s dropdown after `selected` is chosen: the
/// most recent year when the dropdown's own tab is entered, else unchanged.
pub fn year_after_select(
    selected: Option<Tab>,
    dropdown_tab: Tab,
    options: &YearOptions,
    current: Option<i32>,
) -> Option<i32> {
    if selected == Some(dropdown_tab) {
        options.default_year()
    } else {
        current
    }
}
