//! Fetch module for quotescrape
//!
//! A single GET against the configured page.

mod client;

pub use client::{HttpFetcher, PageSource};
