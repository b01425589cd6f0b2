use clap::Parser;
use tracing::{error, info};

mod cli;
mod commands;
mod config;
mod logging;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = config::AppConfig::load(cli.config.as_deref())?.with_overrides(&cli);
    logging::init(&config.log)?;
    info!("configuration and logging initialized");

    commands::run(&cli, &config).inspect_err(|e| error!("{e:#}"))
}
