//! External (open web) plagiarism check.

use tracing::info;

use paperlens_core::{PlagiarismReport, Result};
use paperlens_embed::{rank_matches, ScoredInput};
use paperlens_extract::extract_text_and_metadata;
use paperlens_query::synthesize_queries;
use paperlens_retrieve::{collect_urls, fetch_candidates};

use crate::services::{embed_candidates, Services};

/// Check a document against the open web.
///
/// Search, fetch and embedding failures degrade the report instead of
/// failing the request; only an unextractable document is a hard error.
pub async fn check_external(
    services: &Services,
    file_name: &str,
    bytes: &[u8],
) -> Result<PlagiarismReport> {
    let doc = extract_text_and_metadata(bytes)?;

    let queries = synthesize_queries(&doc, services.claims.as_ref()).await;
    let urls = collect_urls(
        services.search.as_ref(),
        &queries,
        services.fetch_concurrency,
    )
    .await;
    let candidates = fetch_candidates(
        services.fetcher.as_ref(),
        urls,
        services.fetch_concurrency,
    )
    .await;
    info!(
        queries = queries.len(),
        candidates = candidates.len(),
        "external check retrieval complete"
    );

    let document_vector = services.embedder.embed(&doc.text).await?;
    let scored = embed_candidates(services.embedder.as_ref(), candidates)
        .await
        .into_iter()
        .map(|(candidate, vector)| ScoredInput {
            source_id: candidate.source_id,
            vector,
            filename: None,
        })
        .collect();

    let matches = rank_matches(&document_vector, scored);
    let queries_used = queries.into_iter().map(|q| q.text).collect();

    Ok(PlagiarismReport::from_matches(
        file_name,
        matches,
        doc.metadata,
        Some(queries_used),
    ))
}
