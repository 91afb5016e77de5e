//! Freedom In Tibet dashboard
//!
//! A single page with three tabs. Overview is static; the Freedom and
//! Self-Immolation tabs each carry a year dropdown whose value drives their
//! charts.
//!
//! Data flow:
//! 1. `build.rs` copies both CSV datasets into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount, the CSVs are loaded into an in-memory SQLite database and
//!    each dropdown is set to its table's most recent year.
//! 4. Selecting a tab swaps the content area. Each tab subscribes its charts
//!    to its own year signal; a change rebuilds those charts through
//!    `fit_charts` and hands them to D3.js.

mod binder;
mod freedom_tab;
mod incidents_tab;
mod overview;

use dioxus::prelude::*;
use fit_chart_ui::components::{ErrorDisplay, LoadingSpinner, TabSelector};
use fit_chart_ui::state::AppState;
use fit_chart_ui::{js_bridge, location};
use fit_core::Tab;
use fit_db::Database;
use freedom_tab::FreedomTab;
use incidents_tab::IncidentsTab;
use overview::Overview;

/// Freedom scores per country and year.
const FREEDOM_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/freedom.csv"));
/// Self-immolation incidents.
const SELF_IMMOLATION_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/self_immolation.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("freedom-in-tibet-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load both datasets once on mount
    use_effect(move || {
        js_bridge::init_charts();
        let db = match Database::from_csv(FREEDOM_CSV, SELF_IMMOLATION_CSV) {
            Ok(db) => db,
            Err(e) => {
                state.fail(format!("{:#}", e));
                return;
            }
        };
        let initial_tab = Tab::from_fragment(&location::fragment());
        if let Err(e) = state.install(db, initial_tab) {
            state.fail(format!("{:#}", e));
        }
    });

    rsx! {
        div {
            style: "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            h1 {
                style: "text-align: center; font-size: 2.5em;",
                "Freedom In Tibet"
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                TabSelector {}
                div {
                    id: "tabs-content",
                    style: "width: 75%; float: right; margin-left: 40px; padding-top: 20px;",
                    TabContent { tab: (state.active_tab)() }
                }
            }
        }
    }
}

/// Content for the selected tab; nothing when no tab is selected.
#[component]
fn TabContent(#[props(!optional)] tab: Option<Tab>) -> Element {
    match tab {
        Some(Tab::Overview) => rsx! { Overview {} },
        Some(Tab::Freedom) => rsx! { FreedomTab {} },
        Some(Tab::SelfImmolation) => rsx! { IncidentsTab {} },
        None => rsx! {},
    }
}
