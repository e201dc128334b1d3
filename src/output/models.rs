//! Data models for scraped quotes

use serde::{Deserialize, Serialize};

/// A quote and its author, as found in one quote block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    /// Text content of the quote element, untrimmed
    pub text: String,

    /// Text content of the author element, untrimmed
    pub author: String,
}

impl QuoteRecord {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Line format of the output file
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputLayout {
    /// `Quote: ` / `Author: - ` lines, separator followed by one newline
    #[default]
    Compact,
    /// `quote: ` / `author: ` lines, separator followed by five newlines
    Spaced,
}

impl OutputLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Spaced => "spaced",
        }
    }

    pub(crate) fn quote_prefix(&self) -> &'static str {
        match self {
            Self::Compact => "Quote: ",
            Self::Spaced => "quote: ",
        }
    }

    pub(crate) fn author_prefix(&self) -> &'static str {
        match self {
            Self::Compact => "Author: - ",
            Self::Spaced => "author: ",
        }
    }

    /// Newlines written after the dash separator
    pub(crate) fn separator_newlines(&self) -> usize {
        match self {
            Self::Compact => 1,
            Self::Spaced => 5,
        }
    }
}
