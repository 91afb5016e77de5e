//! Typed read queries.
//!
//! Ties on `total` are broken by `rowid`, i.e. by the order rows appeared in
//! the source file.

use crate::models::{CategoryCount, FreedomScore, IncidentDimension, TableCounts};
use crate::Database;
use fit_core::BORDER_ISSUE_COUNTRIES;
use rusqlite::{params, params_from_iter, Row};

fn freedom_score(row: &Row<'_>) -> rusqlite::Result<FreedomScore> {
    Ok(FreedomScore {
        country: row.get(0)?,
        year: row.get(1)?,
        total: row.get(2)?,
        status: row.get(3)?,
    })
}

impl Database {
    // ───────────────────── Freedom Queries ─────────────────────

    /// Distinct years in the freedom table, ascending.
    pub fn query_freedom_years(&self) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT year FROM freedom ORDER BY year")?;
        let years = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        Ok(years)
    }

    /// The `limit` rows with the smallest total for `year`, ascending.
    pub fn query_lowest_scores(
        &self,
        year: i32,
        limit: usize,
    ) -> anyhow::Result<Vec<FreedomScore>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country, year, total, status FROM freedom
             WHERE year = ?1
             ORDER BY total ASC, rowid ASC
             LIMIT ?2",
        )?;
        let rows = stmt
            .query_map(params![year, limit as i64], freedom_score)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[FIT] query: query_lowest_scores({}) returned {} records",
            year,
            rows.len()
        );
        Ok(rows)
    }

    /// Every year of every country among the `limit` lowest scorers of
    /// `year`, ordered by country then year.
    pub fn query_lowest_history(
        &self,
        year: i32,
        limit: usize,
    ) -> anyhow::Result<Vec<FreedomScore>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country, year, total, status FROM freedom
             WHERE country IN (
                 SELECT country FROM freedom
                 WHERE year = ?1
                 ORDER BY total ASC, rowid ASC
                 LIMIT ?2
             )
             ORDER BY country, year",
        )?;
        let rows = stmt
            .query_map(params![year, limit as i64], freedom_score)?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[FIT] query: query_lowest_history({}) returned {} records",
            year,
            rows.len()
        );
        Ok(rows)
    }

    /// Every year of the given countries, ordered by country then year.
    pub fn query_country_histories(
        &self,
        countries: &[&str],
    ) -> anyhow::Result<Vec<FreedomScore>> {
        if countries.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = vec!["?"; countries.len()].join(", ");
        let sql = format!(
            "SELECT country, year, total, status FROM freedom
             WHERE country IN ({})
             ORDER BY country, year",
            placeholders
        );
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(countries.iter()), freedom_score)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Every year of the fixed border-issue countries that appear in the data.
    pub fn query_border_issue_history(&self) -> anyhow::Result<Vec<FreedomScore>> {
        let rows = self.query_country_histories(&BORDER_ISSUE_COUNTRIES)?;
        log::info!(
            "[FIT] query: query_border_issue_history returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Self-Immolation Queries ─────────────────────

    /// Distinct incident years (all >= 2013), ascending.
    pub fn query_incident_years(&self) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT year FROM self_immolation ORDER BY year")?;
        let years = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        Ok(years)
    }

    /// Number of incidents recorded for `year`.
    pub fn query_incident_count(&self, year: i32) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row(
            "SELECT COUNT(*) FROM self_immolation WHERE year = ?1",
            params![year],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Incident counts for `year` grouped by `category`, optionally split by
    /// `group`. Ordered by category, then group.
    pub fn query_incident_counts(
        &self,
        year: i32,
        category: IncidentDimension,
        group: Option<IncidentDimension>,
    ) -> anyhow::Result<Vec<CategoryCount>> {
        let cat = category.column();
        let sql = match group {
            Some(g) => format!(
                "SELECT {cat}, {grp}, COUNT(*) FROM self_immolation
                 WHERE year = ?1
                 GROUP BY {cat}, {grp}
                 ORDER BY {cat}, {grp}",
                cat = cat,
                grp = g.column()
            ),
            None => format!(
                "SELECT {cat}, NULL, COUNT(*) FROM self_immolation
                 WHERE year = ?1
                 GROUP BY {cat}
                 ORDER BY {cat}",
                cat = cat
            ),
        };
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![year], |row| {
                Ok(CategoryCount {
                    category: row.get(0)?,
                    group: row.get(1)?,
                    count: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[FIT] query: query_incident_counts({}, {:?}) returned {} groups",
            year,
            category,
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Summary ─────────────────────

    /// Row totals for both tables.
    pub fn query_table_counts(&self) -> anyhow::Result<TableCounts> {
        let conn = self.conn.borrow();
        let freedom_rows = conn.query_row("SELECT COUNT(*) FROM freedom", [], |row| row.get(0))?;
        let incident_rows =
            conn.query_row("SELECT COUNT(*) FROM self_immolation", [], |row| row.get(0))?;
        Ok(TableCounts {
            freedom_rows,
            incident_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FREEDOM_CSV: &str = "\
Country/Territory,Year,Total,Status
Tibet,2021,1,NF
Tibet,2022,1,NF
North Korea,2021,3,NF
North Korea,2022,3,NF
Eritrea,2022,2,NF
Syria,2022,1,NF
Nepal,2021,56,PF
Nepal,2022,57,PF
Japan,2022,96,F
China,2022,9,NF
";

    const INCIDENT_CSV: &str = "\
Incident,Year,age_groups,Gender,Monk_Status,current_status
Ngaba,2012,18-25,Male,Monk,Deceased
Ngaba,2013,18-25,Male,Monk,Deceased
Kardze,2013,26-35,Female,Non Monk,Unknown
Ngaba,2013,26-35,Male,Non Monk,Deceased
Malho,2015,36-45,Male,Monk,Survived
";

    fn sample_db() -> Database {
        Database::from_csv(FREEDOM_CSV, INCIDENT_CSV).unwrap()
    }

    #[test]
    fn freedom_years_are_distinct_and_sorted() {
        assert_eq!(sample_db().query_freedom_years().unwrap(), vec![2021, 2022]);
    }

    #[test]
    fn lowest_scores_sorted_and_limited() {
        let db = sample_db();
        let rows = db.query_lowest_scores(2022, 3).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.year == 2022));
        assert!(rows.windows(2).all(|w| w[0].total <= w[1].total));
    }

    #[test]
    fn lowest_scores_ties_keep_load_order() {
        let db = sample_db();
        let rows = db.query_lowest_scores(2022, 2).unwrap();
        // Tibet and Syria tie at 1; Tibet was loaded first.
        assert_eq!(rows[0].country, "Tibet");
        assert_eq!(rows[1].country, "Syria");
    }

    #[test]
    fn lowest_scores_returns_all_when_fewer_than_limit() {
        let db = sample_db();
        let rows = db.query_lowest_scores(2021, 10).unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn lowest_scores_absent_year_is_empty() {
        assert!(sample_db().query_lowest_scores(1999, 10).unwrap().is_empty());
    }

    #[test]
    fn lowest_history_spans_all_years() {
        let db = sample_db();
        let rows = db.query_lowest_history(2022, 3).unwrap();
        let countries: std::collections::BTreeSet<&str> =
            rows.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(
            countries.into_iter().collect::<Vec<_>>(),
            vec!["Eritrea", "Syria", "Tibet"]
        );
        // Tibet contributes both 2021 and 2022.
        assert_eq!(rows.iter().filter(|r| r.country == "Tibet").count(), 2);
    }

    #[test]
    fn country_histories_empty_list() {
        assert!(sample_db().query_country_histories(&[]).unwrap().is_empty());
    }

    #[test]
    fn border_issue_history_intersects_fixed_list() {
        let db = sample_db();
        let rows = db.query_border_issue_history().unwrap();
        assert!(rows
            .iter()
            .all(|r| BORDER_ISSUE_COUNTRIES.contains(&r.country.as_str())));
        // Tibet, North Korea, Nepal (2 years each) and Japan (1 year).
        assert_eq!(rows.len(), 7);
        assert!(!rows.iter().any(|r| r.country == "China"));
    }

    #[test]
    fn incident_years_exclude_pre_2013() {
        assert_eq!(sample_db().query_incident_years().unwrap(), vec![2013, 2015]);
    }

    #[test]
    fn incident_count_by_year() {
        let db = sample_db();
        assert_eq!(db.query_incident_count(2013).unwrap(), 3);
        assert_eq!(db.query_incident_count(2012).unwrap(), 0);
    }

    #[test]
    fn incident_counts_by_province() {
        let db = sample_db();
        let rows = db
            .query_incident_counts(2013, IncidentDimension::Province, None)
            .unwrap();
        assert_eq!(
            rows,
            vec![
                CategoryCount {
                    category: "Kardze".to_string(),
                    group: None,
                    count: 1
                },
                CategoryCount {
                    category: "Ngaba".to_string(),
                    group: None,
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn incident_counts_split_by_gender() {
        let db = sample_db();
        let rows = db
            .query_incident_counts(
                2013,
                IncidentDimension::AgeGroup,
                Some(IncidentDimension::Gender),
            )
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].category, "26-35");
        assert_eq!(rows[1].group.as_deref(), Some("Female"));
        assert_eq!(rows.iter().map(|r| r.count).sum::<i64>(), 3);
    }

    #[test]
    fn table_counts() {
        let counts = sample_db().query_table_counts().unwrap();
        assert_eq!(counts.freedom_rows, 10);
        assert_eq!(counts.incident_rows, 4);
    }
}
