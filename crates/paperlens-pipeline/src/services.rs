//! Collaborator bundle threaded through the pipeline operations.

use std::sync::Arc;

use ndarray::Array1;
use tracing::warn;

use paperlens_core::Candidate;
use paperlens_embed::Embedder;
use paperlens_query::ClaimsProvider;
use paperlens_retrieve::{SearchProvider, TextFetcher};
use paperlens_store::PaperStore;

/// Everything a detection request needs beyond its own document.
///
/// All collaborators are trait objects so tests can swap in deterministic
/// fakes.
pub struct Services {
    pub store: Arc<PaperStore>,
    pub embedder: Arc<dyn Embedder>,
    pub claims: Arc<dyn ClaimsProvider>,
    pub search: Arc<dyn SearchProvider>,
    pub fetcher: Arc<dyn TextFetcher>,
    /// Bound on concurrent search/fetch calls per request.
    pub fetch_concurrency: usize,
}

/// Embed candidate texts, preferring one batched call.
///
/// If the batch call fails, candidates are embedded one by one with
/// per-candidate failures isolated: a candidate we cannot embed is
/// dropped, not fatal.
pub(crate) async fn embed_candidates(
    embedder: &dyn Embedder,
    candidates: Vec<Candidate>,
) -> Vec<(Candidate, Array1<f32>)> {
    let texts: Vec<String> = candidates.iter().map(|c| c.text.clone()).collect();
    match embedder.embed_batch(&texts).await {
        Ok(vectors) => candidates.into_iter().zip(vectors).collect(),
        Err(e) => {
            warn!("batch embedding failed, retrying per candidate: {e}");
            let mut out = Vec::new();
            for candidate in candidates {
                match embedder.embed(&candidate.text).await {
                    Ok(vector) => out.push((candidate, vector)),
                    Err(e) => {
                        warn!(source_id = %candidate.source_id, "embedding failed, candidate dropped: {e}");
                    }
                }
            }
            out
        }
    }
}
