//! CLI command implementations

use anyhow::{Context, Result};

use crate::cli::args::{ConfigCommand, ScrapeArgs};
use crate::config::Settings;
use crate::scrape::ScrapePipeline;

/// Fetch the configured page and save its quotes
pub async fn scrape(settings: &Settings, args: ScrapeArgs) -> Result<()> {
    let settings = apply_overrides(settings, args);

    let pipeline = ScrapePipeline::from_settings(&settings).context("Invalid configuration")?;

    let report = pipeline.run().await.with_context(|| {
        format!("Failed to write quotes to {}", settings.output_path().display())
    })?;

    if report.skipped > 0 {
        println!("Skipped {} malformed quote blocks", report.skipped);
    }

    match report.output {
        Some(path) => println!("Saved {} quotes to {}", report.records.len(), path.display()),
        None => println!("No quotes found on the page."),
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

fn apply_overrides(settings: &Settings, args: ScrapeArgs) -> Settings {
    let mut settings = settings.clone();

    if let Some(url) = args.url {
        settings.source.url = url;
    }
    if let Some(dir) = args.output_dir {
        settings.output.dir = dir;
    }
    if let Some(file) = args.file {
        settings.output.file_name = file;
    }
    if let Some(layout) = args.layout {
        settings.output.layout = layout;
    }

    settings
}
