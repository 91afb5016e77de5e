//! Placeholder a D3 chart renders into.

use dioxus::prelude::*;
use fit_charts::ChartId;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Chart slot; its container id is the DOM id D3 renders into
    pub chart: ChartId,
    /// Optional minimum height in pixels
    #[props(default = 420)]
    pub min_height: u32,
}

/// An empty div for one chart. Replaced wholesale on every render.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; margin-bottom: 16px;",
        props.min_height
    );
    let id = props.chart.container_id();

    rsx! {
        div {
            id: "{id}",
            class: "fit-chart",
            style: "{style}",
        }
    }
}
