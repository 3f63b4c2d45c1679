use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use chatshell::{
    core::cmd_executor::Services,
    infrastructure::{
        cli::Cli,
        config::Config,
        device::{ConfiguredCameraAccess, LogHaptics},
        navigation::LogNavigator,
        row_source::InMemoryRowSource,
        tui::real::RealTui,
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

const ROWS_FILE: &str = "rows.json5";

fn row_source(args: &Cli, config: &Config) -> Result<InMemoryRowSource> {
    if let Some(path) = &args.rows {
        return InMemoryRowSource::from_file(path);
    }
    let path = config.config_dir().join(ROWS_FILE);
    if path.exists() {
        log::info!("Loading rows from {}", path.display());
        InMemoryRowSource::from_file(&path)
    } else {
        InMemoryRowSource::sample()
    }
}

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    let services = Services {
        row_source: Arc::new(row_source(&args, &config)?),
        haptics: Arc::new(LogHaptics::new(&config.device)),
        navigator: Arc::new(LogNavigator::new()),
        camera: Arc::new(ConfiguredCameraAccess::from(&config.device)),
    };

    let tui = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new(&config, tui, services);
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
