//! Web page fetching and visible-text extraction.

use async_trait::async_trait;
use paperlens_core::{Error, Result};
use scraper::{Html, Selector};

/// Trait for URL-to-visible-text backends.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    /// Fetch a page and return its visible paragraph text.
    async fn fetch_visible_text(&self, url: &str) -> Result<String>;
}

/// Fetcher over a timeout-bound reqwest client.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// The client should carry the per-fetch timeout (5 s suggested).
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextFetcher for PageFetcher {
    async fn fetch_visible_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::remote("fetch", e))?;
        let body = response
            .text()
            .await
            .map_err(|e| Error::remote("fetch", e))?;
        // Html is parsed and dropped without an await in between; the
        // future stays Send.
        Ok(visible_text(&body))
    }
}

/// Join the text of all `<p>` elements in an HTML document.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let paragraphs = Selector::parse("p").expect("static selector");

    let mut parts: Vec<String> = Vec::new();
    for element in document.select(&paragraphs) {
        let text = element.text().collect::<Vec<_>>().join("");
        let text = text.trim();
        if !text.is_empty() {
            parts.push(text.to_string());
        }
    }
    parts.join(" ")
}
