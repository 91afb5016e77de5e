//! SQL schema for the in-memory database.

/// Returns the full SQL schema as a single batch string.
///
/// - `freedom` - country, year, total score, status; unique per (country, year)
/// - `self_immolation` - province, year, age group, gender, monk status, current status
///
/// Both tables keep the implicit `rowid`, which records load order and breaks
/// ties when sorting by score.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS freedom (
        country TEXT NOT NULL,
        year INTEGER NOT NULL,
        total REAL NOT NULL,
        status TEXT NOT NULL,
        UNIQUE (country, year)
    );
    CREATE INDEX IF NOT EXISTS idx_freedom_year ON freedom(year);
    CREATE INDEX IF NOT EXISTS idx_freedom_country ON freedom(country);

    CREATE TABLE IF NOT EXISTS self_immolation (
        province TEXT NOT NULL,
        year INTEGER NOT NULL,
        age_group TEXT NOT NULL,
        gender TEXT NOT NULL,
        monk_status TEXT NOT NULL,
        current_status TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_self_immolation_year ON self_immolation(year);
    "#
}
