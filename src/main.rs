use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use userdeck::cli::Cli;
use userdeck::config::{Config, ConfigError};
use userdeck::logging::init_tracing;
use userdeck::ui::screen::ViewSettings;
use userdeck::users::HttpUserSource;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!(
        endpoint = %config.source.endpoint,
        page_size = config.view.page_size,
        "Starting"
    );

    let source = HttpUserSource::from_config(&config.source)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = userdeck::ui::run(
        Arc::new(source),
        ViewSettings::from(&config.view),
        runtime.handle(),
    );
    runtime.shutdown_background();
    result.context("Terminal UI failed")
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    Config::load_from(&path, cli.overrides())
}
