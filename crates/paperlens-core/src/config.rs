//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to the PaperLens data directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Corpus database directory (`data/corpus/`).
    pub corpus: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            corpus: root.join("corpus"),
            root,
        };
        std::fs::create_dir_all(&paths.corpus)?;
        Ok(paths)
    }
}

/// Connection details for one OpenAI-compatible HTTP service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
}

/// Credentials for the keyword web-search API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub api_key: String,
    pub cx_id: String,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
}

/// Top-level PaperLens configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperLensConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Embedding service (same model for every call in a deployment).
    pub embedding: ServiceEndpoint,
    /// Generative claim-extraction service.
    pub claims: ServiceEndpoint,
    /// Web search credentials.
    pub search: SearchConfig,
    /// Page fetch timeout in seconds.
    pub fetch_timeout_secs: u64,
    /// Bound on concurrent search/fetch calls per request.
    pub fetch_concurrency: usize,
}

impl PaperLensConfig {
    /// Create configuration from environment variables and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = env_parsed("PORT", 3010);
        let data_paths = DataPaths::new(data_dir)?;

        let embedding = ServiceEndpoint {
            base_url: env_or("PAPERLENS_EMBED_URL", "https://api.openai.com/v1"),
            model: env_or("PAPERLENS_EMBED_MODEL", "text-embedding-3-small"),
            api_key: env_or("PAPERLENS_EMBED_API_KEY", ""),
        };
        let claims = ServiceEndpoint {
            base_url: env_or("PAPERLENS_CLAIMS_URL", "https://api.openai.com/v1"),
            model: env_or("PAPERLENS_CLAIMS_MODEL", "gpt-4o-mini"),
            api_key: env_or("PAPERLENS_CLAIMS_API_KEY", ""),
        };
        let search = SearchConfig {
            api_key: env_or("PAPERLENS_SEARCH_API_KEY", ""),
            cx_id: env_or("PAPERLENS_SEARCH_CX_ID", ""),
            timeout_secs: env_parsed("PAPERLENS_SEARCH_TIMEOUT_SECS", 10),
        };

        Ok(Self {
            port,
            data_paths,
            embedding,
            claims,
            search,
            fetch_timeout_secs: env_parsed("PAPERLENS_FETCH_TIMEOUT_SECS", 5),
            fetch_concurrency: env_parsed("PAPERLENS_FETCH_CONCURRENCY", 8),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
