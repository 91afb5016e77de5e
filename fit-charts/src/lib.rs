//! Chart builders for the Freedom In Tibet dashboard.
//!
//! Every builder is a pure function of the loaded [`Database`] and, for most
//! charts, a selected year. The returned [`Figure`] serializes to the data and
//! config JSON consumed by the D3.js chart scripts.
//!
//! [`ChartId`] enumerates the dashboard's chart slots and binds each one to
//! its builder, its DOM container and its tab.
//!
//! [`Database`]: fit_db::Database

pub mod figure;
pub mod freedom;
pub mod incidents;
mod registry;

pub use figure::{
    BarDatum, Figure, FigureData, FigureKind, FigureLayout, LinePoint, LineSeries, ScatterPoint,
};
pub use freedom::{line_border_issues, line_lowest10, scatter, LOWEST_COUNT};
pub use incidents::{bar_by_age_gender, bar_by_current_status, bar_by_monk_status, bar_by_province};
pub use registry::ChartId;
