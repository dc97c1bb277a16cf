//! Embedding backend trait and the HTTP implementation.
//!
//! All vectors compared within one deployment must come from the same
//! embedder; mixing models or dimensionalities breaks the scorer's
//! contract.

use async_trait::async_trait;
use ndarray::Array1;
use paperlens_core::{Error, Result, ServiceEndpoint};
use serde::Deserialize;
use serde_json::json;

/// Trait for embedding backends.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed one text into a fixed-length vector.
    async fn embed(&self, text: &str) -> Result<Array1<f32>>;

    /// Embed a batch of texts. The default issues sequential calls;
    /// backends with batch endpoints should override.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Array1<f32>>> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.embed(text).await?);
        }
        Ok(out)
    }
}

/// Embedder backed by an OpenAI-compatible `/embeddings` endpoint.
pub struct HttpEmbedder {
    client: reqwest::Client,
    endpoint: ServiceEndpoint,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Deserialize)]
struct EmbeddingItem {
    index: usize,
    embedding: Vec<f32>,
}

impl HttpEmbedder {
    pub fn new(client: reqwest::Client, endpoint: ServiceEndpoint) -> Self {
        Self { client, endpoint }
    }

    async fn request(&self, inputs: &[&str]) -> Result<Vec<Array1<f32>>> {
        let url = format!("{}/embeddings", self.endpoint.base_url.trim_end_matches('/'));
        let body = json!({
            "model": self.endpoint.model,
            "input": inputs,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.endpoint.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Embedding(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Embedding(format!("API error {status}: {body}")));
        }

        let parsed: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| Error::Embedding(format!("malformed response: {e}")))?;

        if parsed.data.len() != inputs.len() {
            return Err(Error::Embedding(format!(
                "expected {} vectors, got {}",
                inputs.len(),
                parsed.data.len()
            )));
        }

        // The API is allowed to reorder items; restore input order by index.
        let mut items = parsed.data;
        items.sort_by_key(|item| item.index);
        Ok(items
            .into_iter()
            .map(|item| Array1::from_vec(item.embedding))
            .collect())
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Array1<f32>> {
        let mut vectors = self.request(&[text]).await?;
        vectors
            .pop()
            .ok_or_else(|| Error::Embedding("empty response".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Array1<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        self.request(&refs).await
    }
}
