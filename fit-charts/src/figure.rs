//! Serializable chart descriptions handed to D3.js.

use serde::Serialize;

/// Which D3 renderer draws the figure.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FigureKind {
    Scatter,
    Line,
    Bar,
}

/// Title, axis labels and legend label. Serialized as the chart config.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FigureLayout {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub color_label: String,
}

/// One country's score in the lowest-10 scatter.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub country: String,
    pub year: i32,
    pub total: f64,
    /// Color key.
    pub status: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LinePoint {
    pub year: i32,
    pub total: f64,
}

/// One country's line, points in year order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<LinePoint>,
}

/// One bar segment: `count` incidents in `category`, colored by `color`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BarDatum {
    pub category: String,
    pub color: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FigureData {
    Scatter(Vec<ScatterPoint>),
    Line(Vec<LineSeries>),
    Bar(Vec<BarDatum>),
}

/// A complete chart: renderer, layout and data.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub kind: FigureKind,
    pub layout: FigureLayout,
    pub data: FigureData,
}

impl Figure {
    pub fn data_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.data)?)
    }

    pub fn layout_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.layout)?)
    }

    /// Number of records drawn: points, line vertices or counted incidents.
    pub fn record_count(&self) -> usize {
        match &self.data {
            FigureData::Scatter(points) => points.len(),
            FigureData::Line(series) => series.iter().map(|s| s.points.len()).sum(),
            FigureData::Bar(bars) => bars.iter().map(|b| b.count.max(0) as usize).sum(),
        }
    }
}
