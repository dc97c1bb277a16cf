//! Internal (private corpus) plagiarism check.

use paperlens_core::{Error, PlagiarismReport, Result};
use paperlens_embed::{rank_matches, ScoredInput};
use paperlens_extract::extract_text_and_metadata;

use crate::services::Services;

/// Check a document against every previously stored paper.
///
/// Stored vectors are reused directly; there is no query synthesis, no
/// network fetch and no length filter. An empty corpus is a hard error:
/// there is nothing to compare against by construction.
pub async fn check_internal(
    services: &Services,
    file_name: &str,
    bytes: &[u8],
) -> Result<PlagiarismReport> {
    let doc = extract_text_and_metadata(bytes)?;

    let stored = services.store.list_all()?;
    if stored.is_empty() {
        return Err(Error::NoCorpus);
    }

    let document_vector = services.embedder.embed(&doc.text).await?;
    let scored = stored
        .into_iter()
        .map(|record| ScoredInput {
            source_id: record.paper_id,
            vector: record.vector,
            filename: if record.filename.is_empty() {
                None
            } else {
                Some(record.filename)
            },
        })
        .collect();

    let matches = rank_matches(&document_vector, scored);

    Ok(PlagiarismReport::from_matches(
        file_name,
        matches,
        doc.metadata,
        None,
    ))
}
