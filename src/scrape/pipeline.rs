//! Fetch, extract, write

use std::path::PathBuf;

use crate::config::Settings;
use crate::extract::QuoteExtractor;
use crate::fetch::{HttpFetcher, PageSource};
use crate::output::{write_quotes, OutputTarget, QuoteRecord};
use crate::{QuotesError, Result};

/// Outcome of a single scrape
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeReport {
    /// Quote blocks found on the page
    pub containers: usize,

    /// Records extracted, in page order
    pub records: Vec<QuoteRecord>,

    /// Blocks skipped because a field was missing
    pub skipped: usize,

    /// File written, if any records were found
    pub output: Option<PathBuf>,
}

/// One-shot scrape of a single page
pub struct ScrapePipeline {
    source: Box<dyn PageSource>,
    extractor: QuoteExtractor,
    url: String,
    target: OutputTarget,
}

impl ScrapePipeline {
    pub fn new(
        source: Box<dyn PageSource>,
        extractor: QuoteExtractor,
        url: impl Into<String>,
        target: OutputTarget,
    ) -> Self {
        Self {
            source,
            extractor,
            url: url.into(),
            target,
        }
    }

    /// Build a pipeline that fetches over HTTP using the given settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        if settings.source.url.trim().is_empty() {
            return Err(QuotesError::Config("source.url is empty".to_string()));
        }
        if settings.output.file_name.trim().is_empty() {
            return Err(QuotesError::Config("output.file_name is empty".to_string()));
        }

        Ok(Self::new(
            Box::new(HttpFetcher::new()),
            QuoteExtractor::from_settings(settings)?,
            settings.source.url.clone(),
            OutputTarget::from_settings(settings),
        ))
    }

    /// Fetch the page and extract its quotes.
    ///
    /// Fetch failures are logged and produce an empty list.
    pub async fn collect(&self) -> ScrapeReport {
        let html = match self.source.fetch(&self.url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Failed to retrieve the web page: {}", e);
                return ScrapeReport::default();
            }
        };

        let extraction = self.extractor.extract(&html);

        ScrapeReport {
            containers: extraction.containers,
            records: extraction.records,
            skipped: extraction.skipped,
            output: None,
        }
    }

    /// Collect quotes and write them out.
    ///
    /// No file is written when nothing was extracted. Write errors are
    /// returned to the caller.
    pub async fn run(&self) -> Result<ScrapeReport> {
        let mut report = self.collect().await;

        if report.records.is_empty() {
            return Ok(report);
        }

        let path = write_quotes(&report.records, &self.target)?;
        tracing::info!("Quotes successfully saved");
        report.output = Some(path);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputLayout;
    use async_trait::async_trait;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FIXTURE: &str = r#"<div class="quote"><span class="text">"Test quote"</span><small class="author">Jane Doe</small></div>"#;

    struct StaticPage(&'static str);

    #[async_trait]
    impl PageSource for StaticPage {
        async fn fetch(&self, _url: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct NotFound;

    #[async_trait]
    impl PageSource for NotFound {
        async fn fetch(&self, url: &str) -> Result<String> {
            Err(QuotesError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    fn pipeline(source: Box<dyn PageSource>, dir: &std::path::Path) -> ScrapePipeline {
        ScrapePipeline::new(
            source,
            QuoteExtractor::from_settings(&Settings::default()).unwrap(),
            "http://quotes.invalid",
            OutputTarget::new(dir.join("out"), "quotes.txt", OutputLayout::Compact),
        )
    }

    #[tokio::test]
    async fn writes_fixture_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let report = pipeline(Box::new(StaticPage(FIXTURE)), tmp.path())
            .run()
            .await
            .unwrap();

        let path = report.output.expect("file should be written");
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "Quote: \"Test quote\"\nAuthor: - Jane Doe\n--------------------\n"
        );
        assert_eq!(report.records.len(), 1);
    }

    #[tokio::test]
    async fn no_quotes_means_no_file() {
        let tmp = tempfile::tempdir().unwrap();
        let report = pipeline(Box::new(StaticPage("<p>empty</p>")), tmp.path())
            .run()
            .await
            .unwrap();

        assert!(report.records.is_empty());
        assert!(report.output.is_none());
        assert!(!tmp.path().join("out").exists());
    }

    #[tokio::test]
    async fn fetch_failure_yields_empty_report() {
        let tmp = tempfile::tempdir().unwrap();
        let report = pipeline(Box::new(NotFound), tmp.path()).run().await.unwrap();

        assert_eq!(report, ScrapeReport::default());
        assert!(!tmp.path().join("out").exists());
    }

    #[tokio::test]
    async fn http_404_is_not_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let tmp = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.source.url = server.uri();
        settings.output.dir = tmp.path().join("out");

        let report = ScrapePipeline::from_settings(&settings)
            .unwrap()
            .collect()
            .await;
        assert!(report.records.is_empty());
    }

    #[test]
    fn empty_file_name_is_a_config_error() {
        let mut settings = Settings::default();
        settings.output.file_name = "  ".to_string();

        let err = ScrapePipeline::from_settings(&settings).err().unwrap();
        assert!(matches!(err, QuotesError::Config(_)));
    }

    #[tokio::test]
    async fn write_error_propagates() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("out"), "not a directory").unwrap();

        let result = pipeline(Box::new(StaticPage(FIXTURE)), tmp.path()).run().await;
        assert!(matches!(result, Err(QuotesError::Io(_))));
    }
}
