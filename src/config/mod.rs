//! Configuration module for quotescrape
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{OutputSettings, SelectorSettings, Settings, SourceSettings, URL_ENV_VAR};
