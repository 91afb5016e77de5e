//! Freedom score charts.

use crate::figure::{
    Figure, FigureData, FigureKind, FigureLayout, LinePoint, LineSeries, ScatterPoint,
};
use fit_db::models::FreedomScore;
use fit_db::Database;

/// How many of the least-free countries the freedom charts follow.
pub const LOWEST_COUNT: usize = 10;

const COUNTRY_LABEL: &str = "Country/Territory";
const TOTAL_LABEL: &str = "Total Score";

fn layout(title: String, x_axis_label: &str, color_label: &str) -> FigureLayout {
    FigureLayout {
        title,
        x_axis_label: x_axis_label.to_string(),
        y_axis_label: TOTAL_LABEL.to_string(),
        color_label: color_label.to_string(),
    }
}

/// Fold rows ordered by (country, year) into one series per country.
fn into_series(rows: Vec<FreedomScore>) -> Vec<LineSeries> {
    let mut series: Vec<LineSeries> = Vec::new();
    for row in rows {
        let point = LinePoint {
            year: row.year,
            total: row.total,
        };
        match series.last_mut() {
            Some(last) if last.name == row.country => last.points.push(point),
            _ => series.push(LineSeries {
                name: row.country,
                points: vec![point],
            }),
        }
    }
    series
}

/// The ten lowest-scoring countries of `year`, ascending by total, colored
/// by status.
pub fn scatter(db: &Database, year: i32) -> anyhow::Result<Figure> {
    let points = db
        .query_lowest_scores(year, LOWEST_COUNT)?
        .into_iter()
        .map(|row| ScatterPoint {
            country: row.country,
            year: row.year,
            total: row.total,
            status: row.status,
        })
        .collect();
    Ok(Figure {
        kind: FigureKind::Scatter,
        layout: layout(
            format!("Lowest 10 countries in {}", year),
            COUNTRY_LABEL,
            "Status",
        ),
        data: FigureData::Scatter(points),
    })
}

/// Full score history of the ten lowest-scoring countries of `year`.
pub fn line_lowest10(db: &Database, year: i32) -> anyhow::Result<Figure> {
    let rows = db.query_lowest_history(year, LOWEST_COUNT)?;
    Ok(Figure {
        kind: FigureKind::Line,
        layout: layout(
            "Lowest 10 Countries Over Time".to_string(),
            "Year",
            COUNTRY_LABEL,
        ),
        data: FigureData::Line(into_series(rows)),
    })
}

/// Full score history of the border-issue countries. Independent of the
/// selected year.
pub fn line_border_issues(db: &Database) -> anyhow::Result<Figure> {
    let rows = db.query_border_issue_history()?;
    Ok(Figure {
        kind: FigureKind::Line,
        layout: layout(
            "Countries Related to Border Issues Over Time".to_string(),
            "Year",
            COUNTRY_LABEL,
        ),
        data: FigureData::Line(into_series(rows)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_core::BORDER_ISSUE_COUNTRIES;
    use std::collections::BTreeSet;
    use std::fmt::Write;

    /// 50 countries in 2020 with distinct totals, plus 2019 history for a few.
    fn fifty_country_db() -> Database {
        let mut csv = String::from("Country/Territory,Year,Total,Status\n");
        for i in 0..50 {
            // Totals 98, 96, ..., 0 so the lowest ones are loaded last.
            let total = 98 - 2 * i;
            let status = if total < 35 { "NF" } else if total < 70 { "PF" } else { "F" };
            writeln!(csv, "Country {:02},2020,{},{}", i, total, status).unwrap();
        }
        writeln!(csv, "Country 49,2019,1,NF").unwrap();
        writeln!(csv, "Country 45,2019,9,NF").unwrap();
        writeln!(csv, "Country 01,2019,95,F").unwrap();
        let db = Database::new().unwrap();
        db.load_freedom(&csv).unwrap();
        db
    }

    fn scatter_points(figure: &Figure) -> &[ScatterPoint] {
        match &figure.data {
            FigureData::Scatter(points) => points,
            other => panic!("expected scatter data, got {:?}", other),
        }
    }

    fn line_series(figure: &Figure) -> &[LineSeries] {
        match &figure.data {
            FigureData::Line(series) => series,
            other => panic!("expected line data, got {:?}", other),
        }
    }

    #[test]
    fn scatter_takes_ten_lowest_of_year() {
        let db = fifty_country_db();
        let figure = scatter(&db, 2020).unwrap();
        let points = scatter_points(&figure);

        assert_eq!(points.len(), 10);
        assert!(points.iter().all(|p| p.year == 2020));
        assert!(points.windows(2).all(|w| w[0].total <= w[1].total));
        assert_eq!(points[0].country, "Country 49");
        assert_eq!(points[0].total, 0.0);
        assert_eq!(points[9].country, "Country 40");
        assert_eq!(figure.layout.title, "Lowest 10 countries in 2020");
        assert_eq!(figure.kind, FigureKind::Scatter);
    }

    #[test]
    fn scatter_returns_all_rows_when_fewer_than_ten() {
        let db = fifty_country_db();
        let figure = scatter(&db, 2019).unwrap();
        assert_eq!(scatter_points(&figure).len(), 3);
    }

    #[test]
    fn scatter_absent_year_is_empty() {
        let db = fifty_country_db();
        assert_eq!(scatter(&db, 1990).unwrap().record_count(), 0);
    }

    #[test]
    fn line_lowest10_matches_scatter_countries() {
        let db = fifty_country_db();
        let scatter_set: BTreeSet<String> = scatter_points(&scatter(&db, 2020).unwrap())
            .iter()
            .map(|p| p.country.clone())
            .collect();
        let line = line_lowest10(&db, 2020).unwrap();
        let line_set: BTreeSet<String> =
            line_series(&line).iter().map(|s| s.name.clone()).collect();
        assert_eq!(scatter_set, line_set);
    }

    #[test]
    fn line_lowest10_includes_other_years() {
        let db = fifty_country_db();
        let line = line_lowest10(&db, 2020).unwrap();
        let country_49 = line_series(&line)
            .iter()
            .find(|s| s.name == "Country 49")
            .unwrap();
        let years: Vec<i32> = country_49.points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2019, 2020]);
        // Country 01 scores high in 2020, so its 2019 row must not appear.
        assert!(!line_series(&line).iter().any(|s| s.name == "Country 01"));
    }

    #[test]
    fn border_issues_only_contains_fixed_countries() {
        let db = Database::new().unwrap();
        db.load_freedom(
            "Country/Territory,Year,Total,Status
Tibet,2020,1,NF
Tibet,2021,1,NF
China,2021,9,NF
Nepal,2021,56,PF
Japan,2021,96,F
Norway,2021,100,F
",
        )
        .unwrap();
        let figure = line_border_issues(&db).unwrap();
        let names: Vec<&str> = line_series(&figure).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Japan", "Nepal", "Tibet"]);
        assert!(names.iter().all(|n| BORDER_ISSUE_COUNTRIES.contains(n)));
        assert_eq!(figure.record_count(), 4);
    }

    #[test]
    fn border_issues_ignore_selected_year() {
        let db = fifty_country_db();
        db.load_freedom("Country/Territory,Year,Total,Status\nTibet,2020,1,NF\n")
            .unwrap();
        let first = line_border_issues(&db).unwrap();
        let _ = scatter(&db, 2019).unwrap();
        let second = line_border_issues(&db).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn into_series_groups_consecutive_rows() {
        let rows = vec![
            FreedomScore {
                country: "A".to_string(),
                year: 2020,
                total: 1.0,
                status: "NF".to_string(),
            },
            FreedomScore {
                country: "A".to_string(),
                year: 2021,
                total: 2.0,
                status: "NF".to_string(),
            },
            FreedomScore {
                country: "B".to_string(),
                year: 2020,
                total: 3.0,
                status: "NF".to_string(),
            },
        ];
        let series = into_series(rows);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].points.len(), 2);
        assert_eq!(series[1].name, "B");
    }
}
