use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

/// One country's freedom score for one year.
///
/// The source file carries many more columns (region, sub-scores, edition);
/// only the four used by the dashboard are read, the rest are ignored.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct FreedomRecord {
    #[serde(rename = "Country/Territory")]
    pub country: String,
    #[serde(rename = "Year")]
    pub year: i32,
    /// Aggregate score; lower means less free. `None` for an empty cell.
    #[serde(rename = "Total")]
    pub total: Option<f64>,
    /// Freedom status label (`F`, `PF`, `NF`).
    #[serde(rename = "Status")]
    pub status: String,
}

impl FreedomRecord {
    /// Parse freedom records from header-addressed CSV text.
    ///
    /// Any row that fails to deserialize fails the whole parse. An empty
    /// `Total` cell is not a failure; it reads as `None`.
    pub fn parse_csv(csv_data: &str) -> anyhow::Result<Vec<FreedomRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_data.as_bytes());
        let mut records = Vec::new();
        for (line, result) in rdr.deserialize().enumerate() {
            let record: FreedomRecord = result.map_err(|e| {
                anyhow::anyhow!("freedom csv row {}: {}", line + 1, e)
            })?;
            records.push(record);
        }
        log::info!("[FIT] parsed {} freedom records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_columns_and_ignores_extras() {
        let csv = "\
Country/Territory,Region,Edition,Status,PR rating,CL rating,Total,Year
Tibet,Asia,2022,NF,7,7,1,2022
Nepal,Asia,2022,PF,3,4,57,2022
";
        let records = FreedomRecord::parse_csv(csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            FreedomRecord {
                country: "Tibet".to_string(),
                year: 2022,
                total: Some(1.0),
                status: "NF".to_string(),
            }
        );
        assert_eq!(records[1].country, "Nepal");
        assert_eq!(records[1].total, Some(57.0));
    }

    #[test]
    fn trims_whitespace() {
        let csv = "Country/Territory,Year,Total,Status\n North Korea , 2021 , 3 , NF \n";
        let records = FreedomRecord::parse_csv(csv).unwrap();
        assert_eq!(records[0].country, "North Korea");
        assert_eq!(records[0].year, 2021);
    }

    #[test]
    fn rejects_non_numeric_total() {
        let csv = "Country/Territory,Year,Total,Status\nTibet,2022,n/a,NF\n";
        let err = FreedomRecord::parse_csv(csv).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn empty_total_reads_as_missing() {
        let csv = "Country/Territory,Year,Total,Status\nTibet,2022,,NF\nNepal,2022,57,PF\n";
        let records = FreedomRecord::parse_csv(csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].total, None);
        assert_eq!(records[1].total, Some(57.0));
    }

    #[test]
    fn rejects_missing_column() {
        let csv = "Country/Territory,Year,Status\nTibet,2022,NF\n";
        assert!(FreedomRecord::parse_csv(csv).is_err());
    }

    #[test]
    fn empty_input_yields_no_records() {
        let records = FreedomRecord::parse_csv("").unwrap();
        assert!(records.is_empty());
    }
}
