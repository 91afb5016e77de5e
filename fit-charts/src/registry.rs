//! The dashboard's chart slots and the builder bound to each.

use crate::figure::Figure;
use crate::{freedom, incidents};
use fit_core::Tab;
use fit_db::Database;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    FreedomScatter,
    FreedomLine,
    BorderIssuesLine,
    BarByProvince,
    BarByAgeGroup,
    BarByMonkStatus,
    BarByCurrentStatus,
}

impl ChartId {
    pub const ALL: [ChartId; 7] = [
        ChartId::FreedomScatter,
        ChartId::FreedomLine,
        ChartId::BorderIssuesLine,
        ChartId::BarByProvince,
        ChartId::BarByAgeGroup,
        ChartId::BarByMonkStatus,
        ChartId::BarByCurrentStatus,
    ];

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ChartId::FreedomScatter => "freedom-scatter",
            ChartId::FreedomLine => "freedom-line",
            ChartId::BorderIssuesLine => "border-issues",
            ChartId::BarByProvince => "by-province",
            ChartId::BarByAgeGroup => "by-age-group",
            ChartId::BarByMonkStatus => "by-monk-status",
            ChartId::BarByCurrentStatus => "by-current-status",
        }
    }

    /// DOM id of the chart placeholder.
    pub fn container_id(&self) -> &'static str {
        match self {
            ChartId::FreedomScatter => "freedom-scatter-plot",
            ChartId::FreedomLine => "freedom-line-plot",
            ChartId::BorderIssuesLine => "border-issues-line-plot",
            ChartId::BarByProvince => "bar-by-province",
            ChartId::BarByAgeGroup => "bar-by-age-group",
            ChartId::BarByMonkStatus => "bar-by-monk-status",
            ChartId::BarByCurrentStatus => "bar-by-current-status",
        }
    }

    /// Tab whose layout holds the placeholder.
    pub fn tab(&self) -> Tab {
        match self {
            ChartId::FreedomScatter | ChartId::FreedomLine | ChartId::BorderIssuesLine => {
                Tab::Freedom
            }
            _ => Tab::SelfImmolation,
        }
    }

    /// Whether the chart is recomputed when the tab's year changes.
    pub fn follows_year(&self) -> bool {
        !matches!(self, ChartId::BorderIssuesLine)
    }

    /// Charts placed on `tab`, in layout order.
    pub fn on_tab(tab: Tab) -> impl Iterator<Item = ChartId> {
        ChartId::ALL.into_iter().filter(move |chart| chart.tab() == tab)
    }

    /// Run the bound builder. Year-independent charts ignore `year`; the
    /// others fail without one.
    pub fn build(&self, db: &Database, year: Option<i32>) -> anyhow::Result<Figure> {
        let need_year = || year.ok_or_else(|| anyhow::anyhow!("chart {} needs a year", self));
        match self {
            ChartId::FreedomScatter => freedom::scatter(db, need_year()?),
            ChartId::FreedomLine => freedom::line_lowest10(db, need_year()?),
            ChartId::BorderIssuesLine => freedom::line_border_issues(db),
            ChartId::BarByProvince => incidents::bar_by_province(db, need_year()?),
            ChartId::BarByAgeGroup => incidents::bar_by_age_gender(db, need_year()?),
            ChartId::BarByMonkStatus => incidents::bar_by_monk_status(db, need_year()?),
            ChartId::BarByCurrentStatus => incidents::bar_by_current_status(db, need_year()?),
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartId::ALL
            .into_iter()
            .find(|chart| chart.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = ChartId::ALL.iter().map(|c| c.name()).collect();
                format!("unknown chart '{}', expected one of: {}", s, names.join(", "))
            })
    }
}
