//! PaperLens Retrieve — external candidate retrieval.
//!
//! Fans the synthesized queries out to the search API, merges and
//! deduplicates the returned URLs, then fetches each unique URL once.
//! Every remote call is isolated: a failing or slow host contributes
//! nothing and never aborts its siblings.

pub mod fetch;
pub mod search;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use paperlens_core::{Candidate, Query};

pub use fetch::{visible_text, PageFetcher, TextFetcher};
pub use search::{GoogleSearch, SearchProvider};

/// Candidates with less extracted text than this are too sparse to score.
pub const MIN_CANDIDATE_CHARS: usize = 300;

/// Run every query against the search backend with bounded concurrency
/// and merge the results into a deduplicated URL list.
///
/// URLs keep query order, with the first occurrence winning on
/// duplicates, so ranking stays deterministic regardless of which call
/// finishes first.
pub async fn collect_urls(
    search: &dyn SearchProvider,
    queries: &[Query],
    concurrency: usize,
) -> Vec<String> {
    let texts: Vec<String> = queries.iter().map(|q| q.text.clone()).collect();
    let mut results: Vec<(usize, Vec<String>)> = stream::iter(texts.into_iter().enumerate())
        .map(|(index, text)| async move {
            match search.search(&text).await {
                Ok(urls) => (index, urls),
                Err(e) => {
                    warn!(query = %text, "search failed: {e}");
                    (index, Vec::new())
                }
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;
    results.sort_by_key(|(index, _)| *index);

    let mut seen = std::collections::HashSet::new();
    let mut urls = Vec::new();
    for (_, batch) in results {
        for url in batch {
            if seen.insert(url.clone()) {
                urls.push(url);
            }
        }
    }
    urls
}

/// Fetch each URL once and keep those with enough visible text to score.
pub async fn fetch_candidates(
    fetcher: &dyn TextFetcher,
    urls: Vec<String>,
    concurrency: usize,
) -> Vec<Candidate> {
    let mut fetched: Vec<(usize, String, String)> = stream::iter(urls.into_iter().enumerate())
        .map(|(index, url)| async move {
            let text = match fetcher.fetch_visible_text(&url).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(url = %url, "fetch failed: {e}");
                    String::new()
                }
            };
            (index, url, text)
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;
    fetched.sort_by_key(|(index, _, _)| *index);

    fetched
        .into_iter()
        .filter_map(|(_, url, text)| {
            if text.len() < MIN_CANDIDATE_CHARS {
                debug!(url = %url, chars = text.len(), "candidate too sparse, discarded");
                None
            } else {
                Some(Candidate {
                    source_id: url,
                    text,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use paperlens_core::{Error, QuerySource, Result};
    use parking_lot::Mutex;
    use std::collections::HashMap;

    struct FakeSearch {
        by_query: HashMap<String, Vec<String>>,
    }

    #[async_trait]
    impl SearchProvider for FakeSearch {
        async fn search(&self, query: &str) -> Result<Vec<String>> {
            match self.by_query.get(query) {
                Some(urls) => Ok(urls.clone()),
                None => Err(Error::remote("search", "quota exceeded")),
            }
        }
    }

    struct FakeFetcher {
        pages: HashMap<String, String>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextFetcher for FakeFetcher {
        async fn fetch_visible_text(&self, url: &str) -> Result<String> {
            self.calls.lock().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| Error::remote("fetch", "connection refused"))
        }
    }

    fn queries(texts: &[&str]) -> Vec<Query> {
        texts
            .iter()
            .map(|t| Query::new(*t, QuerySource::Statistical))
            .collect()
    }

    #[tokio::test]
    async fn overlapping_queries_dedup_urls() {
        let search = FakeSearch {
            by_query: HashMap::from([
                (
                    "q1".to_string(),
                    vec!["https://a".into(), "https://b".into(), "https://c".into()],
                ),
                (
                    "q2".to_string(),
                    vec!["https://c".into(), "https://a".into(), "https://b".into()],
                ),
            ]),
        };
        let urls = collect_urls(&search, &queries(&["q1", "q2"]), 8).await;
        assert_eq!(urls, vec!["https://a", "https://b", "https://c"]);
    }

    // Retrieval futures cross task boundaries inside the HTTP handlers,
    // so they must stay `Send` even over a trait-object backend.
    #[tokio::test]
    async fn url_collection_future_is_send() {
        fn spawnable<F: std::future::Future + Send>(f: F) -> F {
            f
        }
        let search = FakeSearch {
            by_query: HashMap::from([("q".to_string(), vec!["https://a".into()])]),
        };
        let qs = queries(&["q"]);
        let urls = spawnable(collect_urls(&search as &dyn SearchProvider, &qs, 2)).await;
        assert_eq!(urls, vec!["https://a"]);
    }

    #[tokio::test]
    async fn failing_query_contributes_nothing() {
        let search = FakeSearch {
            by_query: HashMap::from([("good".to_string(), vec!["https://x".into()])]),
        };
        let urls = collect_urls(&search, &queries(&["broken", "good"]), 4).await;
        assert_eq!(urls, vec!["https://x"]);
    }

    #[tokio::test]
    async fn sparse_and_failing_fetches_are_discarded() {
        let long_text = "lorem ipsum ".repeat(40);
        let fetcher = FakeFetcher {
            pages: HashMap::from([
                ("https://rich".to_string(), long_text.clone()),
                ("https://thin".to_string(), "only 150 characters worth".to_string()),
            ]),
            calls: Mutex::new(Vec::new()),
        };
        let urls = vec![
            "https://rich".to_string(),
            "https://thin".to_string(),
            "https://down".to_string(),
        ];
        let candidates = fetch_candidates(&fetcher, urls, 8).await;
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].source_id, "https://rich");
        assert_eq!(candidates[0].text, long_text);
    }

    #[tokio::test]
    async fn each_url_fetched_exactly_once() {
        let body = "x".repeat(400);
        let fetcher = FakeFetcher {
            pages: HashMap::from([
                ("https://a".to_string(), body.clone()),
                ("https://b".to_string(), body.clone()),
            ]),
            calls: Mutex::new(Vec::new()),
        };
        let urls = vec!["https://a".to_string(), "https://b".to_string()];
        let _ = fetch_candidates(&fetcher, urls, 2).await;

        let mut calls = fetcher.calls.lock().clone();
        calls.sort();
        assert_eq!(calls, vec!["https://a", "https://b"]);
    }
}
