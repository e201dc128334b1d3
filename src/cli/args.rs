//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::output::OutputLayout;

/// quotescrape - Save the quotes from a quotes page to a text file
#[derive(Parser, Debug)]
#[command(name = "quotescrape")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `scrape` with no overrides
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the page and write its quotes to a file
    Scrape(ScrapeArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct ScrapeArgs {
    /// Page to fetch
    #[arg(short, long)]
    pub url: Option<String>,

    /// Directory to write into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// File name inside the output directory
    #[arg(short, long)]
    pub file: Option<String>,

    /// Line format of the output file
    #[arg(short, long, value_enum)]
    pub layout: Option<OutputLayout>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
