//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals once D3 has loaded. Data and config are
//! spliced into the call as JSON literals, which are valid JS expressions.

use fit_charts::{Figure, FigureKind};

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");
static MULTI_LINE_CHART_JS: &str = include_str!("../assets/js/multi-line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('FIT JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the chart scripts once D3 is available. Idempotent.
///
/// The scripts declare plain functions; they are evaluated at global scope
/// with an indirect eval and then promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, SCATTER_CHART_JS, MULTI_LINE_CHART_JS, BAR_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__fitChartsReady) {{ window.__fitChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__fitChartsReady || window.__fitChartsPolling) return;
            window.__fitChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__fitChartScripts);
                    delete window.__fitChartScripts;
                    window.renderScatterChart = renderScatterChart;
                    window.renderMultiLineChart = renderMultiLineChart;
                    window.renderBarChart = renderBarChart;
                    window.__fitChartsReady = true;
                    window.__fitChartsPolling = false;
                    console.log('FIT charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Give up on a pending render after this many 100 ms polls.
const MAX_POLLS: u32 = 600;

/// Claim the next render token for a container. Any poll still holding an
/// older token stops without drawing.
fn claim_token_js(container_id: &str) -> String {
    format!(
        "var pending = window.__fitPending || (window.__fitPending = {{}}); \
         var token = (pending['{container_id}'] || 0) + 1; \
         pending['{container_id}'] = token;"
    )
}

/// Script that polls until the charts are ready and the container exists,
/// then calls `window.<function>(container, data, config)`. Only the most
/// recent request per container draws.
fn render_script(
    function: &str,
    container_id: &str,
    data_json: &str,
    config_json: &str,
) -> String {
    let claim = claim_token_js(container_id);
    format!(
        r#"
        (function() {{
            var data = {data_json};
            var config = {config_json};
            {claim}
            var polls = 0;
            var poll = setInterval(function() {{
                if (pending['{container_id}'] !== token) {{
                    clearInterval(poll);
                    return;
                }}
                if (++polls > {MAX_POLLS}) {{
                    clearInterval(poll);
                    console.warn('[FIT] gave up rendering #{container_id}');
                    return;
                }}
                if (window.__fitChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', data, config);
                    }} catch(e) {{ console.error('[FIT] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script(function, container_id, data_json, config_json));
}

/// Render a scatter chart (lowest-10 countries).
pub fn render_scatter_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderScatterChart", container_id, data_json, config_json);
}

/// Render a multi-line chart (score history per country).
pub fn render_multi_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderMultiLineChart", container_id, data_json, config_json);
}

/// Render a stacked count bar chart (incidents).
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Serialize a figure and hand it to the matching renderer.
pub fn render_figure(container_id: &str, figure: &Figure) -> anyhow::Result<()> {
    let data_json = figure.data_json()?;
    let config_json = figure.layout_json()?;
    match figure.kind {
        FigureKind::Scatter => render_scatter_chart(container_id, &data_json, &config_json),
        FigureKind::Line => render_multi_line_chart(container_id, &data_json, &config_json),
        FigureKind::Bar => render_bar_chart(container_id, &data_json, &config_json),
    }
    Ok(())
}

/// Clear a chart's container and cancel any render still waiting for it.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}

fn destroy_script(container_id: &str) -> String {
    format!(
        "(function() {{ {} var el = document.getElementById('{}'); \
         if (el) el.innerHTML = ''; }})();",
        claim_token_js(container_id),
        container_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_claims_a_token_before_polling() {
        let js = render_script("renderBarChart", "bar-by-province", "[]", "{}");
        let claim = js.find("pending['bar-by-province'] = token").unwrap();
        let poll = js.find("setInterval").unwrap();
        assert!(claim < poll);
    }

    #[test]
    fn superseded_poll_stops_before_drawing() {
        let js = render_script("renderBarChart", "bar-by-province", "[]", "{}");
        let check = js.find("pending['bar-by-province'] !== token").unwrap();
        let draw = js.find("window.renderBarChart('bar-by-province'").unwrap();
        assert!(check < draw);
    }

    #[test]
    fn poll_is_bounded() {
        let js = render_script("renderScatterChart", "freedom-scatter-plot", "[]", "{}");
        assert!(js.contains(&format!("++polls > {}", MAX_POLLS)));
    }

    #[test]
    fn destroy_cancels_pending_render() {
        let js = destroy_script("freedom-line-plot");
        assert!(js.contains("pending['freedom-line-plot'] = token"));
        assert!(js.contains("innerHTML = ''"));
    }
}
