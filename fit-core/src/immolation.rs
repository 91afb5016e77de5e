use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

/// Earliest incident year shown on the dashboard.
pub const FIRST_INCIDENT_YEAR: i32 = 2013;

/// A single self-immolation incident.
///
/// The source file names the place column `Incident`; it is read into
/// `province`. Files that already call it `Province` are accepted too.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ImmolationRecord {
    #[serde(rename = "Incident", alias = "Province")]
    pub province: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "age_groups", default)]
    pub age_group: String,
    #[serde(rename = "Gender", default)]
    pub gender: String,
    #[serde(rename = "Monk_Status", default)]
    pub monk_status: String,
    #[serde(rename = "current_status", default)]
    pub current_status: String,
}

impl ImmolationRecord {
    /// Parse incident records from header-addressed CSV text.
    ///
    /// All rows are returned; the year cut-off is applied by the loader.
    pub fn parse_csv(csv_data: &str) -> anyhow::Result<Vec<ImmolationRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_data.as_bytes());
        let mut records = Vec::new();
        for (line, result) in rdr.deserialize().enumerate() {
            let record: ImmolationRecord = result.map_err(|e| {
                anyhow::anyhow!("self-immolation csv row {}: {}", line + 1, e)
            })?;
            records.push(record);
        }
        log::info!("[FIT] parsed {} self-immolation records", records.len());
        Ok(records)
    }

    /// Whether the incident falls inside the dashboard's year window.
    pub fn in_window(&self) -> bool {
        self.year >= FIRST_INCIDENT_YEAR
    }
}
