use std::fs::File;

use anyhow::{Context, Result};
use ml_core::AppConfig;

mod app;
mod state;
mod ui;

const LOG_FILE: &str = "tui.log";

fn main() -> Result<()> {
    init_logging()?;
    app::run::run(AppConfig::from_env())
}

/// Sends `env_logger` output to a file so it never draws over the terminal UI.
fn init_logging() -> Result<()> {
    let file = File::create(LOG_FILE).with_context(|| format!("cannot create '{LOG_FILE}'"))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
