//! Query result models.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON.

use serde::Serialize;

/// A freedom score row as returned by queries.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FreedomScore {
    pub country: String,
    pub year: i32,
    pub total: f64,
    pub status: String,
}

/// Number of incidents in one bar segment.
///
/// `group` is the stacking/color dimension; `None` when the chart colors by
/// the category itself.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub group: Option<String>,
    pub count: i64,
}

/// A column of the self-immolation table that incidents can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentDimension {
    Province,
    AgeGroup,
    Gender,
    MonkStatus,
    CurrentStatus,
}

impl IncidentDimension {
    /// SQL column name. Only ever one of these fixed identifiers.
    pub(crate) fn column(&self) -> &'static str {
        match self {
            IncidentDimension::Province => "province",
            IncidentDimension::AgeGroup => "age_group",
            IncidentDimension::Gender => "gender",
            IncidentDimension::MonkStatus => "monk_status",
            IncidentDimension::CurrentStatus => "current_status",
        }
    }

    /// Axis or legend label.
    pub fn label(&self) -> &'static str {
        match self {
            IncidentDimension::Province => "Province",
            IncidentDimension::AgeGroup => "Age Group",
            IncidentDimension::Gender => "Gender",
            IncidentDimension::MonkStatus => "Monk Status",
            IncidentDimension::CurrentStatus => "Current Status",
        }
    }
}

/// Row totals for both tables.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TableCounts {
    pub freedom_rows: i64,
    pub incident_rows: i64,
}
