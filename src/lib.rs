//! quotescrape - fetch a quotes page, pull out quote/author pairs, save them as text
//!
//! The whole flow is a single pass: fetch, extract, write.

pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod scrape;

use thiserror::Error;

/// Main error type for quotescrape
#[derive(Error, Debug)]
pub enum QuotesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Quote block is missing its {0} element")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuotesError>;

/// Application name
pub const APP_NAME: &str = "quotescrape";
