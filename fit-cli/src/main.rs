//! fit-cli - inspect the Freedom In Tibet datasets and export chart figures.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "fit-cli",
    version,
    about = "Freedom In Tibet dataset and chart toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: fit_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting fit-cli");
    fit_cmd::run(cli.command)
}
