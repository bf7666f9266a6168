//! Command-line entry: build one product card and print it

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::application::ProductService;
use crate::domain::constants::store::SAMPLE_APP_ID;
use crate::domain::product::ProductRecord;
use crate::infrastructure::config::{AppConfig, ConfigManager};
use crate::infrastructure::logging::init_logging_with_config;
use crate::utils::is_bot;

#[derive(Debug, Parser)]
#[command(name = "steam-price-card", version, about = "Steam store card with live peso pricing")]
pub struct Cli {
    /// Steam app id
    #[arg(default_value_t = SAMPLE_APP_ID.to_string())]
    pub app_id: String,

    /// Config file; defaults to `config.json` in the user config directory,
    /// written with default settings on first run
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Store region code sent as `cc`
    #[arg(long, value_name = "CC")]
    pub region: Option<String>,

    /// Print the record and description as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the configured log level
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Only report whether USER_AGENT belongs to a bot
    #[arg(long, value_name = "USER_AGENT")]
    pub check_bot: Option<String>,
}

#[derive(Serialize)]
struct CardOutput<'a> {
    record: &'a ProductRecord,
    description: &'a str,
}

async fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(Some(path.as_path())).context("Failed to load configuration")?,
        None => ConfigManager::new()?.initialize_on_first_run().await?,
    };
    if let Some(region) = &cli.region {
        config.store.region = Some(region.clone());
    }
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    Ok(config)
}

pub async fn run(cli: Cli) -> Result<()> {
    if let Some(user_agent) = &cli.check_bot {
        println!("{}", is_bot(user_agent));
        return Ok(());
    }

    let config = load_config(&cli).await?;
    init_logging_with_config(&config.logging)?;

    let service = ProductService::from_config(&config)?;
    let (record, description) = service
        .describe(&cli.app_id)
        .await
        .with_context(|| format!("Could not build a card for app {}", cli.app_id))?;

    println!("{}", render(&record, &description, cli.json)?);
    Ok(())
}

/// The record and description as pretty JSON, or the title over the
/// description as plain text.
fn render(record: &ProductRecord, description: &str, json: bool) -> Result<String> {
    if json {
        let output = CardOutput {
            record,
            description,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }
    Ok(format!("{}\n{description}", record.title()))
}
