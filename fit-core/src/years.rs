//! Year dropdown options.

use std::collections::BTreeSet;

/// Distinct years available in a table, ascending, with the most recent
/// year as the default selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearOptions {
    years: Vec<i32>,
}

impl YearOptions {
    pub fn from_years<I: IntoIterator<Item = i32>>(years: I) -> Self {
        let distinct: BTreeSet<i32> = years.into_iter().collect();
        Self {
            years: distinct.into_iter().collect(),
        }
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Most recent year, or `None` for an empty table.
    pub fn default_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }
}
