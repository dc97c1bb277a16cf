//! PaperLens Query — search query synthesis from a submitted document.
//!
//! Three independent strategies (abstract section, statistical ranking,
//! generative claim extraction) each contribute up to five sentences; the
//! union is deduplicated and the metadata summary, when present, leads the
//! list. None of the strategies can fail the pipeline: an empty
//! contribution is always acceptable.

pub mod abstracts;
pub mod claims;
pub mod domains;
pub mod statistical;
pub mod stopwords;

use std::collections::HashSet;

use paperlens_core::{ExtractedDocument, Query, QuerySource};

pub use abstracts::{abstract_sentences, extract_abstract};
pub use claims::{parse_claim_lines, ClaimsProvider, HttpClaimsProvider, NoopClaims};
pub use domains::{match_threshold, matching_domains, DomainKeywordTable};
pub use statistical::statistical_sentences;

/// Queries shorter than this carry too little signal to search with.
pub const MIN_QUERY_CHARS: usize = 30;

/// Cap per extraction strategy.
pub const MAX_PER_STRATEGY: usize = 5;

/// Derive the deduplicated query list for one document.
///
/// Order is insertion order after dedup, strategies visited abstract →
/// statistical → generative, with the metadata summary always first when
/// metadata is present. Duplicate texts keep their earliest provenance.
pub async fn synthesize_queries(
    doc: &ExtractedDocument,
    claims: &dyn ClaimsProvider,
) -> Vec<Query> {
    let generative = match claims.generate_claims(&doc.text, MAX_PER_STRATEGY).await {
        Ok(lines) => lines,
        Err(e) => {
            tracing::warn!("generative claim extraction failed: {e}");
            Vec::new()
        }
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut queries: Vec<Query> = Vec::new();
    let mut push = |texts: Vec<String>, source: QuerySource| {
        for text in texts {
            if seen.insert(text.clone()) {
                queries.push(Query::new(text, source));
            }
        }
    };

    push(abstract_sentences(&doc.text), QuerySource::Abstract);
    push(statistical_sentences(&doc.text), QuerySource::Statistical);
    push(generative, QuerySource::Generative);

    let summary = doc.metadata.summary();
    if !summary.is_empty() {
        queries.retain(|q| q.text != summary);
        queries.insert(0, Query::new(summary, QuerySource::MetadataSummary));
    }

    queries
}
