//! Self-Immolation tab: year dropdown and four incident count charts.

use crate::binder;
use dioxus::prelude::*;
use fit_chart_ui::components::{ChartContainer, ChartHeader, YearSelector};
use fit_chart_ui::state::AppState;
use fit_charts::ChartId;
use fit_core::Tab;

#[component]
pub fn IncidentsTab() -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let year = (state.incident_year)();
        if let Some(db) = state.db.read().as_ref() {
            binder::show_year_bound(db, Tab::SelfImmolation, year);
        }
    });

    rsx! {
        div {
            ChartHeader {
                title: "Self Immolation Incidents Visualization".to_string(),
                description: "Explore self-immolation incidents by province, age group, monk status and current status. Use the dropdown to select the year of interest.".to_string(),
            }
            YearSelector {
                id: "year-dropdown".to_string(),
                options: (state.incident_years)(),
                year: state.incident_year,
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(480px, 1fr)); gap: 12px;",
                for chart in ChartId::on_tab(Tab::SelfImmolation) {
                    ChartContainer { key: "{chart}", chart }
                }
            }
        }
    }
}
