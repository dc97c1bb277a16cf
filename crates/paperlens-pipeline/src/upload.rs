//! Paper upload: extract, embed and persist into the corpus.

use tracing::info;

use paperlens_core::{Error, PaperRecord, Result};
use paperlens_extract::extract_text_and_metadata;

use crate::services::Services;

/// Store (or overwrite) a paper under the caller-supplied id.
///
/// Upsert is last-write-wins; concurrent uploads of the same id race
/// silently.
pub async fn upload_paper(
    services: &Services,
    paper_id: &str,
    file_name: &str,
    bytes: &[u8],
) -> Result<String> {
    let paper_id = paper_id.trim();
    if paper_id.is_empty() {
        return Err(Error::Validation("paper_id is required".to_string()));
    }

    let doc = extract_text_and_metadata(bytes)?;
    let vector = services.embedder.embed(&doc.text).await?;

    services.store.upsert(&PaperRecord {
        paper_id: paper_id.to_string(),
        text: doc.text,
        vector,
        filename: file_name.to_string(),
    })?;

    info!(paper_id, "paper stored");
    Ok(paper_id.to_string())
}
