//! Extraction module for quotescrape
//!
//! Turns raw HTML into quote records using CSS selectors.

mod extractor;

pub use extractor::{Extraction, QuoteExtractor};
