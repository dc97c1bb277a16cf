//! Generative strategy: claim extraction via an LLM service.
//!
//! Strictly best-effort. Any transport, API or parse failure is reported
//! as an error to the caller, which logs it and carries on with the other
//! strategies.

use async_trait::async_trait;
use paperlens_core::{Error, Result, ServiceEndpoint};
use serde::Deserialize;
use serde_json::json;

use crate::MIN_QUERY_CHARS;

/// Maximum document prefix sent to the generative service.
const PROMPT_CHAR_BUDGET: usize = 8000;

/// Trait for generative claim-extraction backends.
#[async_trait]
pub trait ClaimsProvider: Send + Sync {
    /// Extract up to `n` concise claims from `text`, suitable as search
    /// queries.
    async fn generate_claims(&self, text: &str, n: usize) -> Result<Vec<String>>;
}

/// Claims provider that never produces anything. Used when no generative
/// service is configured; the pipeline degrades gracefully.
pub struct NoopClaims;

#[async_trait]
impl ClaimsProvider for NoopClaims {
    async fn generate_claims(&self, _text: &str, _n: usize) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Claims provider backed by an OpenAI-compatible chat-completions API.
pub struct HttpClaimsProvider {
    client: reqwest::Client,
    endpoint: ServiceEndpoint,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl HttpClaimsProvider {
    pub fn new(client: reqwest::Client, endpoint: ServiceEndpoint) -> Self {
        Self { client, endpoint }
    }

    fn prompt(text: &str, n: usize) -> String {
        let prefix: String = text.chars().take(PROMPT_CHAR_BUDGET).collect();
        format!(
            "Extract the top {n} most important points or claims made in this \
             scientific research paper.\n\
             These should be concise and suitable for use as search queries to \
             detect possible plagiarism.\n\nText:\n{prefix}"
        )
    }
}

#[async_trait]
impl ClaimsProvider for HttpClaimsProvider {
    async fn generate_claims(&self, text: &str, n: usize) -> Result<Vec<String>> {
        let url = format!(
            "{}/chat/completions",
            self.endpoint.base_url.trim_end_matches('/')
        );
        let body = json!({
            "model": self.endpoint.model,
            "messages": [{"role": "user", "content": Self::prompt(text, n)}],
            "temperature": 0.2,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.endpoint.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::remote("claims", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote("claims", format!("API error {status}: {body}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::remote("claims", format!("malformed response: {e}")))?;

        let content = parsed
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .unwrap_or("");

        Ok(parse_claim_lines(content, n))
    }
}

/// Parse line-oriented LLM output into claim strings: drop short lines,
/// strip bullet markers, keep the first `n`.
pub fn parse_claim_lines(output: &str, n: usize) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| line.len() > MIN_QUERY_CHARS)
        .map(|line| line.trim_matches(['•', '-', '*', ' ']).to_string())
        .take(n)
        .collect()
}
