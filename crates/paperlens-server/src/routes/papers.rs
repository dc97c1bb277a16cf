//! Paper upload route.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};

use crate::error::ApiError;
use crate::routes::multipart::read_submission;
use crate::state::AppState;
use paperlens_core::Error;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/papers", post(upload_paper))
}

/// POST /api/papers — store a paper in the internal corpus.
///
/// Multipart fields: `paper_id` (required, non-empty) and `file`.
async fn upload_paper(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let form = read_submission(multipart).await?;
    let paper_id = form
        .paper_id
        .clone()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| Error::Validation("paper_id is required".to_string()))?;
    let file = form.require_file()?;

    let stored_id =
        paperlens_pipeline::upload_paper(&state.services, &paper_id, &file.filename, &file.bytes)
            .await?;

    Ok(Json(serde_json::json!({
        "status": "stored",
        "paper_id": stored_id,
    })))
}
