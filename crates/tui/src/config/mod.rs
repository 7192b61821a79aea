use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use engine::Currency;
use serde::Deserialize;

use crate::{error::Result, ui::ThemeMode};

const DEFAULT_CONFIG_PATH: &str = "config/pocketbook.toml";
pub const DEFAULT_TITLE: &str = "Pocketbook";

/// What the ledger contains when the app starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    #[default]
    Demo,
    Empty,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub theme: ThemeMode,
    pub currency: Currency,
    pub seed: SeedMode,
    /// JSON array of entries added on start-up. Read once, never written.
    pub import: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            theme: ThemeMode::Dark,
            currency: Currency::Krw,
            seed: SeedMode::Demo,
            import: None,
            log_file: PathBuf::from("pocketbook.log"),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pocketbook", about = "Single-page personal finance ledger")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Title shown at the top of the page.
    #[arg(long)]
    title: Option<String>,
    /// Initial theme.
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,
    /// Ledger currency (KRW, EUR or USD).
    #[arg(long, value_parser = parse_currency)]
    currency: Option<Currency>,
    /// Start with the demo entries or an empty ledger.
    #[arg(long, value_enum)]
    seed: Option<SeedMode>,
    /// JSON file with entries to add on start-up.
    #[arg(long)]
    import: Option<PathBuf>,
    /// Where log lines are written (the terminal belongs to the UI).
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Log level for pocketbook and engine targets.
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_currency(value: &str) -> std::result::Result<Currency, String> {
    Currency::try_from(value).map_err(|err| err.to_string())
}

pub fn load() -> Result<AppConfig> {
    load_from(Args::parse())
}

pub fn load_from(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("POCKETBOOK"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(title) = args.title {
        settings.title = title;
    }
    if let Some(theme) = args.theme {
        settings.theme = theme;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(import) = args.import {
        settings.import = Some(import);
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}
