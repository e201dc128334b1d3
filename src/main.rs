//! quotescrape - Save the quotes from a quotes page to a text file
//!
//! Entry point for the quotescrape CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quotescrape::cli::{Cli, Commands};
use quotescrape::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            quotescrape::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                None => {
                    quotescrape::cli::commands::scrape(&settings, Default::default()).await?;
                }
                Some(Commands::Scrape(args)) => {
                    quotescrape::cli::commands::scrape(&settings, args).await?;
                }
                Some(Commands::Config(config_cmd)) => {
                    quotescrape::cli::commands::config_command(&settings, config_cmd)?;
                }
                Some(Commands::Completions { .. }) => unreachable!(),
            }
        }
    }

    Ok(())
}
