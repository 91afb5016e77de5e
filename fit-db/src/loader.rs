//! CSV loading for the two tables.
//!
//! # CSV Formats
//!
//! - **Freedom** (headers): at least `Country/Territory,Year,Total,Status`
//! - **Self-immolation** (headers): `Incident,Year,age_groups,Gender,Monk_Status,current_status`

use crate::Database;
use anyhow::Context;
use fit_core::{FreedomRecord, ImmolationRecord, FIRST_INCIDENT_YEAR};
use rusqlite::params;

impl Database {
    /// Load freedom scores. Returns the number of rows inserted.
    ///
    /// Rows without a score are skipped. A second row for the same country
    /// and year is an error.
    pub fn load_freedom(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = FreedomRecord::parse_csv(csv_data)?;
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        let mut count = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO freedom (country, year, total, status) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for r in &records {
                let Some(total) = r.total else {
                    log::warn!("[FIT] loader: no score for {} {}, skipped", r.country, r.year);
                    continue;
                };
                stmt.execute(params![r.country, r.year, total, r.status])
                    .with_context(|| format!("inserting freedom row {} {}", r.country, r.year))?;
                count += 1;
            }
        }
        tx.commit()?;
        log::info!("[FIT] loader: loaded {} freedom rows", count);
        Ok(count)
    }

    /// Load self-immolation incidents, keeping only years from 2013 on.
    /// Returns the number of rows inserted.
    pub fn load_self_immolation(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = ImmolationRecord::parse_csv(csv_data)?;
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        let mut count = 0usize;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO self_immolation
                 (province, year, age_group, gender, monk_status, current_status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for r in records.iter().filter(|r| r.in_window()) {
                stmt.execute(params![
                    r.province,
                    r.year,
                    r.age_group,
                    r.gender,
                    r.monk_status,
                    r.current_status
                ])?;
                count += 1;
            }
        }
        tx.commit()?;
        let dropped = records.len() - count;
        if dropped > 0 {
            log::warn!(
                "[FIT] loader: dropped {} incidents before {}",
                dropped,
                FIRST_INCIDENT_YEAR
            );
        }
        log::info!("[FIT] loader: loaded {} self-immolation rows", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn load_freedom_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Territory,Year,Total,Status
Tibet,2022,1,NF
Nepal,2022,57,PF
Japan,2022,96,F
";
        assert_eq!(db.load_freedom(csv).unwrap(), 3);

        let conn = db.conn.borrow();
        let status: String = conn
            .query_row(
                "SELECT status FROM freedom WHERE country = 'Nepal' AND year = 2022",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(status, "PF");
    }

    #[test]
    fn load_freedom_skips_rows_without_score() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Territory,Year,Total,Status
Tibet,2022,,NF
Nepal,2022,57,PF
";
        assert_eq!(db.load_freedom(csv).unwrap(), 1);
        let rows = db.query_lowest_scores(2022, 10).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, "Nepal");
    }

    #[test]
    fn load_freedom_rejects_duplicate_country_year() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Territory,Year,Total,Status
Tibet,2022,1,NF
Tibet,2022,2,NF
";
        let err = db.load_freedom(csv).unwrap_err();
        assert!(format!("{:#}", err).contains("Tibet 2022"));
    }

    #[test]
    fn failed_load_leaves_table_empty() {
        let db = Database::new().unwrap();
        let csv = "\
Country/Territory,Year,Total,Status
Tibet,2022,1,NF
Tibet,2022,2,NF
";
        assert!(db.load_freedom(csv).is_err());
        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM freedom", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0, "transaction should roll back");
    }

    #[test]
    fn load_self_immolation_filters_before_2013() {
        let db = Database::new().unwrap();
        let csv = "\
Incident,Year,age_groups,Gender,Monk_Status,current_status
Ngaba,2009,18-25,Male,Monk,Deceased
Ngaba,2012,18-25,Male,Monk,Deceased
Kardze,2013,26-35,Female,Non Monk,Unknown
Malho,2016,36-45,Male,Non Monk,Deceased
";
        assert_eq!(db.load_self_immolation(csv).unwrap(), 2);

        let conn = db.conn.borrow();
        let min_year: i32 = conn
            .query_row("SELECT MIN(year) FROM self_immolation", [], |row| row.get(0))
            .unwrap();
        assert_eq!(min_year, 2013);
    }

    #[test]
    fn load_self_immolation_stores_province() {
        let db = Database::new().unwrap();
        let csv = "\
Incident,Year,age_groups,Gender,Monk_Status,current_status
Kardze,2013,26-35,Female,Non Monk,Unknown
";
        db.load_self_immolation(csv).unwrap();
        let conn = db.conn.borrow();
        let province: String = conn
            .query_row("SELECT province FROM self_immolation", [], |row| row.get(0))
            .unwrap();
        assert_eq!(province, "Kardze");
    }
}
