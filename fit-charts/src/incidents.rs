//! Self-immolation incident bar charts.
//!
//! Each chart counts the incidents of one year by a single dimension. The
//! age group chart additionally stacks by gender.

use crate::figure::{BarDatum, Figure, FigureData, FigureKind, FigureLayout};
use fit_db::models::IncidentDimension;
use fit_db::Database;

fn count_bars(
    db: &Database,
    year: i32,
    title: String,
    category: IncidentDimension,
    group: Option<IncidentDimension>,
) -> anyhow::Result<Figure> {
    let bars = db
        .query_incident_counts(year, category, group)?
        .into_iter()
        .map(|row| BarDatum {
            color: row.group.unwrap_or_else(|| row.category.clone()),
            category: row.category,
            count: row.count,
        })
        .collect();
    Ok(Figure {
        kind: FigureKind::Bar,
        layout: FigureLayout {
            title,
            x_axis_label: category.label().to_string(),
            y_axis_label: "Count".to_string(),
            color_label: group.unwrap_or(category).label().to_string(),
        },
        data: FigureData::Bar(bars),
    })
}

pub fn bar_by_province(db: &Database, year: i32) -> anyhow::Result<Figure> {
    count_bars(
        db,
        year,
        format!("Incidents by Province in {}", year),
        IncidentDimension::Province,
        None,
    )
}

/// Counts by age group, stacked by gender.
pub fn bar_by_age_gender(db: &Database, year: i32) -> anyhow::Result<Figure> {
    count_bars(
        db,
        year,
        format!("Number of Incidents by Age Group and Gender in {}", year),
        IncidentDimension::AgeGroup,
        Some(IncidentDimension::Gender),
    )
}

pub fn bar_by_monk_status(db: &Database, year: i32) -> anyhow::Result<Figure> {
    count_bars(
        db,
        year,
        format!("Number of Incidents by Monks vs Non Monks in {}", year),
        IncidentDimension::MonkStatus,
        None,
    )
}

pub fn bar_by_current_status(db: &Database, year: i32) -> anyhow::Result<Figure> {
    count_bars(
        db,
        year,
        format!("Number of Incidents by Current Status in {}", year),
        IncidentDimension::CurrentStatus,
        None,
    )
}
