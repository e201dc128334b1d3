//! Selector-driven quote extraction

use scraper::{ElementRef, Html, Selector};

use crate::config::Settings;
use crate::output::QuoteRecord;
use crate::{QuotesError, Result};

/// Result of one extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Records in document order
    pub records: Vec<QuoteRecord>,

    /// Number of containers matched
    pub containers: usize,

    /// Containers dropped because a field was missing
    pub skipped: usize,
}

/// Compiled selectors for quote blocks and their fields
#[derive(Debug, Clone)]
pub struct QuoteExtractor {
    container: Selector,
    text: Selector,
    author: Selector,
}

impl QuoteExtractor {
    pub fn new(container: &str, text: &str, author: &str) -> Result<Self> {
        Ok(Self {
            container: parse_selector(container)?,
            text: parse_selector(text)?,
            author: parse_selector(author)?,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let selectors = &settings.selectors;
        Self::new(&selectors.container, &selectors.text, &selectors.author)
    }

    /// Extract every quote block from `html`.
    ///
    /// Blocks missing the text or author element are logged and skipped.
    pub fn extract(&self, html: &str) -> Extraction {
        let document = Html::parse_document(html);
        let mut extraction = Extraction::default();

        for (index, container) in document.select(&self.container).enumerate() {
            extraction.containers += 1;

            match self.extract_record(container) {
                Ok(record) => extraction.records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping quote block #{}: {}", index + 1, e);
                    extraction.skipped += 1;
                }
            }
        }

        if extraction.containers == 0 {
            tracing::debug!("Page contained no quote blocks");
        } else {
            tracing::debug!(
                "Extracted {} of {} quote blocks",
                extraction.records.len(),
                extraction.containers
            );
        }

        extraction
    }

    fn extract_record(&self, container: ElementRef<'_>) -> Result<QuoteRecord> {
        let text = first_text(container, &self.text).ok_or(QuotesError::MissingField("text"))?;
        let author =
            first_text(container, &self.author).ok_or(QuotesError::MissingField("author"))?;

        Ok(QuoteRecord { text, author })
    }
}

fn parse_selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw).map_err(|e| QuotesError::Selector(format!("'{}': {}", raw, e)))
}

/// Concatenated text nodes of the first descendant matching `selector`
fn first_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(|element| element.text().collect())
}
