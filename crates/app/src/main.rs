use anyhow::Context;
use clap::Parser;

use pescaderia_app::{App, AppConfig, Cli, cli};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    pescaderia_observability::init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    tracing::info!(now = %config.now, command = ?args.command, "pescaderia starting");

    let app = App::new(config)?;
    let output = cli::run(&app, &args.command)?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
