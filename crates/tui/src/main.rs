mod app;
mod config;
mod error;
mod quick_add;
mod ui;

use std::{fs::OpenOptions, sync::Arc};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

fn main() -> Result<()> {
    let config = config::load()?;
    setup_logging(&config)?;
    tracing::info!(title = %config.title, theme = config.theme.label(), "starting pocketbook");

    let mut app = app::App::new(config)?;
    app.run()?;

    tracing::info!("bye");
    Ok(())
}

/// Logs go to a file: the terminal belongs to the UI.
fn setup_logging(config: &AppConfig) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "pocketbook={level},engine={level}",
            level = config.log_level
        ))
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
