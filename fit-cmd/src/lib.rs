//! Command implementations for the Freedom In Tibet CLI.
//!
//! Every command loads the two CSV datasets into the same in-memory
//! database the dashboard uses and runs the dashboard's chart builders.

use clap::Subcommand;
use fit_charts::ChartId;

pub mod chart;
pub mod data;
pub mod summary;

pub use data::DataArgs;

#[derive(Subcommand)]
pub enum Command {
    /// List the years selectable on each tab
    Years {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Build one chart and print (or write) its figure as JSON
    Chart {
        /// Chart name: freedom-scatter, freedom-line, border-issues,
        /// by-province, by-age-group, by-monk-status, by-current-status
        chart: ChartId,

        /// Year to build for (defaults to the most recent year of the chart's table)
        #[arg(short, long)]
        year: Option<i32>,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Print row counts, year ranges and border-issue coverage
    Summary {
        #[command(flatten)]
        data: DataArgs,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Years { data } => {
            let db = data.open()?;
            print!("{}", summary::format_years(&db)?);
            Ok(())
        }
        Command::Chart {
            chart,
            year,
            output,
            data,
        } => {
            let db = data.open()?;
            chart::run_chart(&db, chart, year, output.as_deref())
        }
        Command::Summary { data } => {
            let db = data.open()?;
            print!("{}", summary::format_summary(&db)?);
            Ok(())
        }
    }
}
