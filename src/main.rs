use anyhow::Context;
use clap::Parser;

use hello_stores::cli::Cli;
use hello_stores::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = hello_stores::logging::init_tracing() {
        tracing::debug!(path = %path.display(), "logging to file");
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    hello_stores::ui::runtime::run(&config).context("terminal session failed")?;
    Ok(())
}
