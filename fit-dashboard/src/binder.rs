//! Input-to-output bindings: rebuild a tab's charts and replace their
//! placeholders.

use fit_chart_ui::js_bridge;
use fit_charts::ChartId;
use fit_core::Tab;
use fit_db::Database;

/// Rebuild one chart and render it into its placeholder. A failed build is
/// logged and leaves the placeholder empty.
pub fn show(db: &Database, chart: ChartId, year: Option<i32>) {
    let container = chart.container_id();
    let figure = match chart.build(db, year) {
        Ok(figure) => figure,
        Err(e) => {
            log::error!("[FIT] building {} failed: {:#}", chart, e);
            js_bridge::destroy_chart(container);
            return;
        }
    };
    log::info!(
        "[FIT] rendering {} ({} records) into #{}",
        chart,
        figure.record_count(),
        container
    );
    if let Err(e) = js_bridge::render_figure(container, &figure) {
        log::error!("[FIT] serializing {} failed: {:#}", chart, e);
        js_bridge::destroy_chart(container);
    }
}

/// Charts on `tab` that follow its year dropdown. With no year selected
/// (an empty table) the placeholders are cleared.
pub fn show_year_bound(db: &Database, tab: Tab, year: Option<i32>) {
    for chart in ChartId::on_tab(tab).filter(ChartId::follows_year) {
        match year {
            Some(_) => show(db, chart, year),
            None => js_bridge::destroy_chart(chart.container_id()),
        }
    }
}

/// Charts on `tab` that do not depend on the year.
pub fn show_fixed(db: &Database, tab: Tab) {
    for chart in ChartId::on_tab(tab).filter(|c| !c.follows_year()) {
        show(db, chart, None);
    }
}
