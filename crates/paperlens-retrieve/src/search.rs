//! Keyword web search backend.

use async_trait::async_trait;
use paperlens_core::{Error, Result, SearchConfig};
use serde::Deserialize;

/// Trait for ranked-URL search backends.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Return ranked result URLs for one query.
    async fn search(&self, query: &str) -> Result<Vec<String>>;
}

/// Google Custom Search JSON API backend.
pub struct GoogleSearch {
    client: reqwest::Client,
    config: SearchConfig,
}

const SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    #[serde(default)]
    link: String,
}

impl GoogleSearch {
    pub fn new(client: reqwest::Client, config: SearchConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl SearchProvider for GoogleSearch {
    async fn search(&self, query: &str) -> Result<Vec<String>> {
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.cx_id.as_str()),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| Error::remote("search", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote("search", format!("API error {status}: {body}")));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::remote("search", format!("malformed response: {e}")))?;

        Ok(parsed
            .items
            .into_iter()
            .map(|item| item.link)
            .filter(|link| !link.is_empty())
            .collect())
    }
}
