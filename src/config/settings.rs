//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputLayout;

/// Environment variable that overrides `source.url`.
pub const URL_ENV_VAR: &str = "QUOTESCRAPE_URL";

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Page to scrape
    #[serde(default)]
    pub source: SourceSettings,

    /// CSS selectors used by the extractor
    #[serde(default)]
    pub selectors: SelectorSettings,

    /// Where and how quotes are written
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    /// URL fetched with a single GET
    #[serde(default = "default_url")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorSettings {
    /// One match per quote block
    #[serde(default = "default_container_selector")]
    pub container: String,

    /// Quote text, relative to the container
    #[serde(default = "default_text_selector")]
    pub text: String,

    /// Author name, relative to the container
    #[serde(default = "default_author_selector")]
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Output directory, relative to the working directory unless absolute
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name inside `dir`
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Line format (compact, spaced)
    #[serde(default)]
    pub layout: OutputLayout,
}

// Default value functions

fn default_url() -> String {
    "https://quotes.toscrape.com".to_string()
}

fn default_container_selector() -> String {
    "div.quote".to_string()
}

fn default_text_selector() -> String {
    "span.text".to_string()
}

fn default_author_selector() -> String {
    "small.author".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("scraped_data")
}

fn default_file_name() -> String {
    "scraped_quotes.txt".to_string()
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            container: default_container_selector(),
            text: default_text_selector(),
            author: default_author_selector(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            file_name: default_file_name(),
            layout: OutputLayout::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let mut settings = Self::load_from(&config_path)?;
        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse settings from a specific TOML file, without env overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(URL_ENV_VAR) {
            if !url.trim().is_empty() {
                self.source.url = url.trim().to_string();
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "quotescrape", "quotescrape")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Full path of the output file
    pub fn output_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.file_name)
    }
}
