//! `years` and `summary` subcommands.

use fit_core::{YearOptions, BORDER_ISSUE_COUNTRIES};
use fit_db::Database;
use std::collections::BTreeSet;
use std::fmt::Write;

fn year_line(label: &str, options: &YearOptions) -> String {
    let years: Vec<String> = options.years().iter().map(|y| y.to_string()).collect();
    match options.default_year() {
        Some(default) => format!("{}: {} (default {})\n", label, years.join(", "), default),
        None => format!("{}: none\n", label),
    }
}

/// Years offered by each tab's dropdown.
pub fn format_years(db: &Database) -> anyhow::Result<String> {
    let freedom = YearOptions::from_years(db.query_freedom_years()?);
    let incidents = YearOptions::from_years(db.query_incident_years()?);
    Ok(year_line("freedom", &freedom) + &year_line("self-immolation", &incidents))
}

/// Row counts, year options and which border-issue countries have data.
pub fn format_summary(db: &Database) -> anyhow::Result<String> {
    let counts = db.query_table_counts()?;
    let present: BTreeSet<String> = db
        .query_border_issue_history()?
        .into_iter()
        .map(|row| row.country)
        .collect();
    let missing: Vec<&str> = BORDER_ISSUE_COUNTRIES
        .iter()
        .copied()
        .filter(|c| !present.contains(*c))
        .collect();

    let mut out = String::new();
    writeln!(out, "freedom rows: {}", counts.freedom_rows)?;
    writeln!(out, "self-immolation rows (2013 on): {}", counts.incident_rows)?;
    out.push_str(&format_years(db)?);
    writeln!(
        out,
        "border-issue countries with data: {}/{}",
        present.len(),
        BORDER_ISSUE_COUNTRIES.len()
    )?;
    if !missing.is_empty() {
        writeln!(out, "missing: {}", missing.join(", "))?;
    }
    Ok(out)
}
