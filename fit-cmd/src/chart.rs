//! `chart` subcommand: build one figure and emit it as JSON.

use anyhow::Context;
use fit_charts::ChartId;
use fit_core::{Tab, YearOptions};
use fit_db::Database;
use std::fs;

/// The year the dashboard would show for `chart`: the requested one, or the
/// most recent year of the chart's table. `None` for year-independent charts.
/// A requested year outside the table is kept; the chart comes out empty.
pub fn resolve_year(
    db: &Database,
    chart: ChartId,
    year: Option<i32>,
) -> anyhow::Result<Option<i32>> {
    if !chart.follows_year() {
        return Ok(None);
    }
    let years = match chart.tab() {
        Tab::SelfImmolation => db.query_incident_years()?,
        _ => db.query_freedom_years()?,
    };
    let options = YearOptions::from_years(years);
    if let Some(year) = year {
        if !options.contains(year) {
            log::warn!("no data for {} in {}, chart will be empty", chart, year);
        }
        return Ok(Some(year));
    }
    let default = options
        .default_year()
        .with_context(|| format!("no years available for chart {}", chart))?;
    Ok(Some(default))
}

/// Build `chart` as pretty JSON.
pub fn chart_json(db: &Database, chart: ChartId, year: Option<i32>) -> anyhow::Result<String> {
    let year = resolve_year(db, chart, year)?;
    let figure = chart.build(db, year)?;
    log::info!(
        "built {} for {:?}: {} records",
        chart,
        year,
        figure.record_count()
    );
    Ok(serde_json::to_string_pretty(&figure)?)
}

pub fn run_chart(
    db: &Database,
    chart: ChartId,
    year: Option<i32>,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let json = chart_json(db, chart, year)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path))?;
            log::info!("wrote {} to {}", chart, path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_db() -> Database {
        Database::from_csv(
            "Country/Territory,Year,Total,Status
Tibet,2021,1,NF
Tibet,2022,1,NF
Nepal,2022,57,PF
",
            "Incident,Year,age_groups,Gender,Monk_Status,current_status
Ngaba,2013,18-25,Male,Monk,Deceased
Kardze,2016,26-35,Female,Non Monk,Unknown
",
        )
        .unwrap()
    }

    #[test]
    fn defaults_to_most_recent_year_of_chart_table() {
        let db = sample_db();
        assert_eq!(resolve_year(&db, ChartId::FreedomScatter, None).unwrap(), Some(2022));
        assert_eq!(resolve_year(&db, ChartId::BarByProvince, None).unwrap(), Some(2016));
    }

    #[test]
    fn explicit_year_wins() {
        let db = sample_db();
        assert_eq!(
            resolve_year(&db, ChartId::BarByMonkStatus, Some(2013)).unwrap(),
            Some(2013)
        );
    }

    #[test]
    fn year_outside_table_is_kept() {
        let db = sample_db();
        assert_eq!(
            resolve_year(&db, ChartId::BarByProvince, Some(2014)).unwrap(),
            Some(2014)
        );
        let json = chart_json(&db, ChartId::BarByProvince, Some(2014)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["data"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn border_chart_has_no_year() {
        let db = sample_db();
        assert_eq!(resolve_year(&db, ChartId::BorderIssuesLine, Some(2013)).unwrap(), None);
    }

    #[test]
    fn empty_table_has_no_default_year() {
        let db = Database::new().unwrap();
        assert!(resolve_year(&db, ChartId::FreedomLine, None).is_err());
    }

    #[test]
    fn chart_json_contains_title_and_kind() {
        let db = sample_db();
        let json = chart_json(&db, ChartId::FreedomScatter, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "scatter");
        assert_eq!(value["layout"]["title"], "Lowest 10 countries in 2022");
        assert_eq!(value["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn run_chart_writes_output_file() {
        let db = sample_db();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("province.json");
        let path_str = path.display().to_string();
        run_chart(&db, ChartId::BarByProvince, Some(2013), Some(&path_str)).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Incidents by Province in 2013"));
    }
}
