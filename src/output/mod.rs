//! Output module for quotescrape
//!
//! The record type and the plain-text writer.

mod models;
mod writer;

pub use models::{OutputLayout, QuoteRecord};
pub use writer::{render_quotes, write_quotes, OutputTarget, SEPARATOR_WIDTH};
