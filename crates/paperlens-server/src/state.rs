//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use paperlens_core::{Error, PaperLensConfig, Result};
use paperlens_embed::HttpEmbedder;
use paperlens_pipeline::Services;
use paperlens_query::HttpClaimsProvider;
use paperlens_retrieve::{GoogleSearch, PageFetcher};
use paperlens_store::PaperStore;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: PaperLensConfig,
    pub services: Services,
}

impl AppState {
    /// Wire up the store, HTTP clients and collaborators from config.
    pub fn new(config: PaperLensConfig) -> Result<Self> {
        let store = Arc::new(PaperStore::open(&config.data_paths.corpus)?);

        let search_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.search.timeout_secs))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;
        let fetch_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;
        // Embedding and claim extraction tolerate slower upstreams.
        let model_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        let services = Services {
            store,
            embedder: Arc::new(HttpEmbedder::new(
                model_client.clone(),
                config.embedding.clone(),
            )),
            claims: Arc::new(HttpClaimsProvider::new(model_client, config.claims.clone())),
            search: Arc::new(GoogleSearch::new(search_client, config.search.clone())),
            fetcher: Arc::new(PageFetcher::new(fetch_client)),
            fetch_concurrency: config.fetch_concurrency,
        };

        Ok(Self { config, services })
    }
}
