use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

/// Retrieves the raw HTML of a page.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<String>;
}

/// Pulls headline candidates out of an HTML page.
pub trait HeadingExtractor {
    fn extract_headings(&self, html: &str) -> Vec<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; HealthThemes/1.0)")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<String> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .context("Failed to send HTTP request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP error: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }
}

/// Collects the text of `h2` and `h3` elements in document order.
pub struct HtmlHeadingExtractor {
    selector: Selector,
    min_chars: usize,
}

impl HtmlHeadingExtractor {
    pub fn new(min_chars: usize) -> Result<Self> {
        let selector = Selector::parse("h2, h3")
            .map_err(|e| anyhow!("Invalid heading selector: {}", e))?;

        Ok(Self {
            selector,
            min_chars,
        })
    }
}

impl HeadingExtractor for HtmlHeadingExtractor {
    fn extract_headings(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);

        document
            .select(&self.selector)
            .map(|element| {
                // headings often wrap across indented lines; cache entries must be single-line
                let text = element.text().collect::<String>();
                text.split_whitespace().collect::<Vec<_>>().join(" ")
            })
            .filter(|text| text.chars().count() > self.min_chars)
            .collect()
    }
}
