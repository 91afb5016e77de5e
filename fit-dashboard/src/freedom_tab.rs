//! Freedom tab: year dropdown, lowest-10 scatter and line, border-issues line.

use crate::binder;
use dioxus::prelude::*;
use fit_chart_ui::components::{ChartContainer, ChartHeader, YearSelector};
use fit_chart_ui::state::AppState;
use fit_charts::ChartId;
use fit_core::Tab;

#[component]
pub fn FreedomTab() -> Element {
    let state = use_context::<AppState>();

    // Re-runs whenever the selected year changes.
    use_effect(move || {
        let year = (state.freedom_year)();
        if let Some(db) = state.db.read().as_ref() {
            binder::show_year_bound(db, Tab::Freedom, year);
        }
    });

    // Does not read the year: rendered once per mount.
    use_effect(move || {
        if let Some(db) = state.db.read().as_ref() {
            binder::show_fixed(db, Tab::Freedom);
        }
    });

    rsx! {
        div {
            ChartHeader {
                title: "Freedom In Tibet Visualization".to_string(),
                description: "Explore freedom scores, trends and comparisons among countries. Use the dropdown to select the year of interest.".to_string(),
            }
            YearSelector {
                id: "year-dropdown-freedom".to_string(),
                options: (state.freedom_years)(),
                year: state.freedom_year,
            }
            for chart in ChartId::on_tab(Tab::Freedom) {
                ChartContainer { key: "{chart}", chart }
            }
        }
    }
}
