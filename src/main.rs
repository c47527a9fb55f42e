use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use treasury_ops::cli::Cli;
use treasury_ops::tasks::{self, Config};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli.global)?;

    let rt = tokio::runtime::Runtime::new().context("creating tokio runtime")?;
    rt.block_on(tasks::run(cli.command, config))
}
