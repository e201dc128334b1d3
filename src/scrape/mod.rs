//! Scrape module for quotescrape
//!
//! Wires the fetcher, extractor and writer into one pass.

mod pipeline;

pub use pipeline::{ScrapePipeline, ScrapeReport};
