//! Dataset location arguments shared by all commands.

use anyhow::Context;
use clap::Args;
use fit_db::Database;
use std::fs;

#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Freedom scores CSV
    #[arg(long, default_value = "fixtures/Cleanest_Freedom.csv")]
    pub freedom: String,

    /// Self-immolation incidents CSV
    #[arg(long, default_value = "fixtures/Cleaned_selfimmo.csv")]
    pub incidents: String,
}

impl DataArgs {
    /// Read both files and load them. Either file missing is an error.
    pub fn open(&self) -> anyhow::Result<Database> {
        let freedom = fs::read_to_string(&self.freedom)
            .with_context(|| format!("reading freedom dataset {}", self.freedom))?;
        let incidents = fs::read_to_string(&self.incidents)
            .with_context(|| format!("reading self-immolation dataset {}", self.incidents))?;
        log::info!("loading {} and {}", self.freedom, self.incidents);
        Database::from_csv(&freedom, &incidents)
    }
}
